use payloads::{Achievement, AchievementStatistics};
use yew::prelude::*;

use super::Section;
use crate::hooks::use_collection;

fn statistics(stats: &AchievementStatistics) -> Vec<(&'static str, String)> {
    [
        ("Projects", &stats.projects_completed),
        ("YoY growth", &stats.year_on_year_growth),
        ("Funded", &stats.funded),
        ("Downloads", &stats.downloads),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| (label, value.clone()))
    .collect()
}

#[function_component]
pub fn AchievementsSection() -> Html {
    let achievements = use_collection::<Achievement>();

    let content = achievements.render("achievements", |achievements, _, _| html! {
        <div class="grid gap-8 md:grid-cols-2">
            {for achievements.iter().map(|achievement| html! {
                <div key={achievement.id.to_string()} class="p-6 rounded-lg bg-white border border-neutral-200">
                    <div class="flex items-baseline justify-between gap-4">
                        <h3 class="text-lg font-semibold">{&achievement.title}</h3>
                        if let Some(date) = achievement.calendar_date() {
                            <span class="text-sm text-neutral-500">
                                {date.strftime("%b %Y").to_string()}
                            </span>
                        }
                    </div>
                    <p class="mt-2 text-neutral-600">{&achievement.description}</p>
                    <dl class="mt-4 grid grid-cols-2 gap-3">
                        {for statistics(&achievement.statistics).into_iter().map(|(label, value)| html! {
                            <div key={label}>
                                <dt class="text-xs text-neutral-500">{label}</dt>
                                <dd class="text-lg font-semibold">{value}</dd>
                            </div>
                        })}
                    </dl>
                </div>
            })}
        </div>
    });

    html! {
        <Section title="Achievements" class="bg-neutral-50">{content}</Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_statistics_are_hidden() {
        let stats = AchievementStatistics {
            projects_completed: "40".into(),
            year_on_year_growth: String::new(),
            funded: "$2M".into(),
            downloads: String::new(),
        };
        assert_eq!(
            statistics(&stats),
            vec![("Projects", "40".to_string()), ("Funded", "$2M".to_string())]
        );
    }
}
