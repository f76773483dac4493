use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::HtmlContent;
use crate::get_api_client;
use crate::hooks::{use_fetch, use_title};
use crate::utils::format_date;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub slug: String,
}

#[function_component]
pub fn BlogPostPage(props: &Props) -> Html {
    let post = {
        let slug = props.slug.clone();
        use_fetch(slug.clone(), move || {
            let slug = slug.clone();
            async move { get_api_client().blog_by_slug(&slug).await }
        })
    };

    let title = post
        .data
        .as_ref()
        .map(|post| post.title.clone())
        .unwrap_or_else(|| "Blog".to_string());
    use_title(&title);

    let content = post.render("post", |post, _, _| html! {
        <article>
            <header class="mb-8">
                if !post.category.is_empty() {
                    <p class="text-sm font-medium text-neutral-500">{&post.category}</p>
                }
                <h1 class="mt-2 text-4xl font-bold text-neutral-900">{&post.title}</h1>
                <div class="mt-4 flex flex-wrap items-center gap-3 text-sm text-neutral-500">
                    if let Some(author) = &post.author {
                        <span>{author}</span>
                    }
                    if let Some(created_at) = &post.created_at {
                        <span>{format_date(created_at)}</span>
                    }
                    if let Some(duration) = &post.duration {
                        <span>{duration}</span>
                    }
                </div>
            </header>
            if let Some(image) = post.featured_image.as_deref().filter(|i| !i.is_empty()) {
                <img
                    src={get_api_client().image_url(image)}
                    alt={post.title.clone()}
                    class="w-full rounded-lg mb-8 object-cover max-h-[28rem]"
                />
            }
            <HtmlContent html={post.content.clone()} />
            if !post.tags.is_empty() {
                <div class="mt-8 flex flex-wrap gap-2">
                    {for post.tag_list().into_iter().map(|tag| html! {
                        <span key={tag.clone()} class="px-2 py-1 text-xs rounded bg-neutral-100 text-neutral-700">
                            {tag}
                        </span>
                    })}
                </div>
            }
        </article>
    });

    html! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <Link<Route> to={Route::Blog} classes="text-sm text-neutral-600 hover:text-neutral-900">
                {"← All posts"}
            </Link<Route>>
            <div class="mt-6">{content}</div>
        </div>
    }
}
