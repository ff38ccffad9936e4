use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Placeholder until map tiles are available.
#[function_component(MapPage)]
pub fn map_page() -> Html {
    html! {
        <div class="p-8 max-w-7xl mx-auto">
            <div class="min-h-[400px] flex flex-col items-center justify-center bg-white rounded-3xl border-2 border-dashed border-slate-200 text-center p-12">
                <Icon icon_id={IconId::HeroiconsOutlineMap} class="w-12 h-12 text-slate-300 mb-4" />
                <h1 class="text-2xl font-black text-slate-800">{"Map Coming Soon"}</h1>
            </div>
        </div>
    }
}
