use super::*;

#[test]
fn helpers_are_silent_without_a_browser() {
    copy_to_clipboard("Compre agora!");
    open_in_new_tab("https://img.example.com/ad.png");
}
