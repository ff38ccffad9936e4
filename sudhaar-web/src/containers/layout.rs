use crate::containers::footer::Footer;
use crate::containers::header::Header;
use crate::containers::page_content::PageContent;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Signed-in chrome: fixed header, page body, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen bg-slate-50 font-sans flex flex-col">
            <Header current_route={props.current_route.clone()} />
            <main class="flex-grow flex flex-col">
                <PageContent>
                    {props.children.clone()}
                </PageContent>
            </main>
            <Footer />
        </div>
    }
}
