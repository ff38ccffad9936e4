use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    pub children: Children,
}

/// Content well below the fixed header.
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    html! {
        <div class="pt-16 flex-grow">
            {props.children.clone()}
        </div>
    }
}
