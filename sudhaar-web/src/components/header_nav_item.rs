use shared::session::NavItem;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_router::prelude::{Link, Routable};

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub item: NavItem,
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
}

/// Whether `item` should be highlighted for the page being shown.
pub fn is_active(item: &NavItem, current: Option<&MainRoute>) -> bool {
    current.is_some_and(|route| route.to_path() == item.path)
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let Some(route) = MainRoute::recognize(props.item.path) else {
        return html! {};
    };
    let active_route_class = if is_active(&props.item, props.current_route.as_ref()) {
        "text-[#0F2854] btn-soft"
    } else {
        "text-slate-500 hover:text-[#0F2854]"
    };
    let onclick = props.on_navigate.clone().map(|callback| {
        Callback::from(move |_: MouseEvent| callback.emit(()))
    });

    html! {
      <li {onclick}>
          <Link<MainRoute> to={route} classes={classes!("btn", "btn-ghost", "font-bold", "text-sm", active_route_class)}>
              {props.item.label}
          </Link<MainRoute>>
      </li>
    }
}
