use nostr_classroom::App;

fn main() {
    dioxus::launch(App);
}
