use payloads::Stats;
use yew::prelude::*;

use crate::hooks::{FetchHookReturn, use_singleton};

/// Figures to show for a stats fetch: the stored document, or the built-in
/// defaults when the fetch failed or the document is missing or empty.
/// `None` while the first fetch is still running.
pub fn displayed_stats(fetch: &FetchHookReturn<Option<Stats>>) -> Option<Stats> {
    match (fetch.data.as_ref(), &fetch.error) {
        (Some(Some(stats)), _) if !stats.is_empty() => Some(*stats),
        (Some(_), _) | (None, Some(_)) => Some(Stats::default()),
        (None, None) => None,
    }
}

#[function_component]
pub fn StatsSection() -> Html {
    let fetch = use_singleton::<Stats>();

    let Some(stats) = displayed_stats(&fetch) else {
        return html! {
            <section class="py-12 bg-neutral-100">
                <p class="text-center text-neutral-600">{"Loading stats..."}</p>
            </section>
        };
    };

    html! {
        <section class="py-12 bg-neutral-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                {for stats.entries().into_iter().map(|(label, value)| html! {
                    <div key={label}>
                        <p class="text-4xl font-bold text-neutral-900">{format!("{value}+")}</p>
                        <p class="mt-2 text-sm text-neutral-600">{label}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::FetchState;

    fn fetched(
        data: FetchState<Option<Stats>>,
        error: Option<&str>,
    ) -> FetchHookReturn<Option<Stats>> {
        FetchHookReturn {
            data,
            is_loading: false,
            error: error.map(str::to_string),
            refetch: Callback::noop(),
        }
    }

    #[test]
    fn stored_figures_are_shown() {
        let stored = Stats {
            projects_completed: 3,
            happy_clients: 2,
            team_members: 1,
            years_of_experience: 1,
        };
        let fetch = fetched(FetchState::Fetched(Some(stored)), None);
        assert_eq!(displayed_stats(&fetch), Some(stored));
    }

    #[test]
    fn failed_fetch_falls_back_to_defaults() {
        let fetch = fetched(FetchState::NotFetched, Some("500"));
        assert_eq!(displayed_stats(&fetch), Some(Stats::default()));
    }

    #[test]
    fn missing_or_empty_document_falls_back_to_defaults() {
        let missing = fetched(FetchState::Fetched(None), None);
        assert_eq!(displayed_stats(&missing), Some(Stats::default()));

        let empty = Stats {
            projects_completed: 0,
            happy_clients: 0,
            team_members: 0,
            years_of_experience: 0,
        };
        let empty = fetched(FetchState::Fetched(Some(empty)), None);
        assert_eq!(displayed_stats(&empty), Some(Stats::default()));
    }

    #[test]
    fn nothing_is_shown_before_the_first_response() {
        let loading = fetched(FetchState::NotFetched, None);
        assert_eq!(displayed_stats(&loading), None);
    }
}
