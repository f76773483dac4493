use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// One-based
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        current_page,
        total_pages,
        is_loading,
        ..
    } = *props;

    // a single page needs no controls
    if total_pages <= 1 {
        return html! {};
    }

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(current_page.saturating_sub(1).max(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit((current_page + 1).min(total_pages));
        })
    };

    let prev_disabled = current_page <= 1 || is_loading;
    let next_disabled = current_page >= total_pages || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-400 bg-neutral-100 cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-700 bg-white hover:bg-neutral-50 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-6 pt-4 \
                    border-t border-neutral-200">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-neutral-600">
                {format!("Page {} of {}", current_page, total_pages)}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
