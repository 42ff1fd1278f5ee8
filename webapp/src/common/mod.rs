pub mod scroll;
pub mod style;

#[cfg(test)]
pub mod testing {
    use dioxus::prelude::*;

    // renders a root component to an html string
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
