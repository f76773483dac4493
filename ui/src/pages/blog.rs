use payloads::requests::PageQuery;
use payloads::{Blog, BlogStatus, PAGE_SIZE};
use yew::prelude::*;

use crate::components::PaginationControls;
use crate::components::sections::{BlogCard, Section};
use crate::get_api_client;
use crate::hooks::{use_fetch, use_title};

/// Published posts, one server-side page at a time.
#[function_component]
pub fn BlogPage() -> Html {
    use_title("Blog");
    let page = use_state(|| 1usize);

    let posts = {
        let current = *page;
        use_fetch(current, move || async move {
            let query = PageQuery::new(current, PAGE_SIZE)
                .with_status(BlogStatus::Published.as_str());
            get_api_client().list_page::<Blog>(&query).await
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    let content = posts.render("blog posts", |paged, is_loading, _| {
        if paged.data.is_empty() {
            return html! {
                <p class="text-center text-neutral-600">{"No posts yet."}</p>
            };
        }
        html! {
            <>
                <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {for paged.data.iter().map(|post| html! {
                        <BlogCard key={post.id.to_string()} post={post.clone()} />
                    })}
                </div>
                <PaginationControls
                    current_page={paged.page}
                    total_pages={paged.total_pages()}
                    on_page_change={on_page_change.clone()}
                    {is_loading}
                />
            </>
        }
    });

    html! {
        <Section title="Blog" subtitle="News, guides and notes from the team">
            {content}
        </Section>
    }
}
