use yew::prelude::*;

use super::AdminSection;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current: AdminSection,
    pub on_select: Callback<AdminSection>,
}

#[function_component]
pub fn AdminSidebar(props: &Props) -> Html {
    html! {
        <aside class="w-full md:w-60 md:min-h-screen bg-neutral-900 text-neutral-200">
            <div class="px-4 py-5 text-lg font-semibold text-white">
                {"Admin"}
            </div>
            <nav class="flex md:flex-col overflow-x-auto md:overflow-visible">
                {for AdminSection::ALL.iter().map(|section| {
                    let section = *section;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(section))
                    };
                    let class = if section == props.current {
                        "px-4 py-2 text-left text-sm font-medium bg-neutral-700 \
                         text-white whitespace-nowrap"
                    } else {
                        "px-4 py-2 text-left text-sm text-neutral-300 \
                         hover:bg-neutral-800 whitespace-nowrap"
                    };
                    html! {
                        <button key={section.label()} {onclick} {class}>
                            {section.label()}
                        </button>
                    }
                })}
            </nav>
        </aside>
    }
}
