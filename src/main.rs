use portfolio::{ init_logging, App };

fn main() {
    init_logging();
    dioxus::launch(App);
}
