use payloads::requests::PageQuery;
use payloads::{Blog, BlogStatus, Resource};
use yew::prelude::*;
use yew_router::prelude::*;

use super::Section;
use crate::hooks::use_fetch;
use crate::utils::{format_date, plain_text_excerpt};
use crate::{Route, get_api_client};

const PREVIEW_COUNT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct BlogCardProps {
    pub post: Blog,
}

#[function_component]
pub fn BlogCard(props: &BlogCardProps) -> Html {
    let post = &props.post;

    html! {
        <Link<Route>
            to={Route::BlogPost { slug: post.slug.clone() }}
            classes="block rounded-lg border border-neutral-200 overflow-hidden bg-white hover:shadow-md transition-shadow"
        >
            if let Some(image) = post.image() {
                <img
                    src={get_api_client().image_url(image)}
                    alt={post.title.clone()}
                    class="h-48 w-full object-cover bg-neutral-100"
                />
            }
            <div class="p-5">
                <div class="flex items-center gap-2 text-xs text-neutral-500">
                    if !post.category.is_empty() {
                        <span class="font-medium text-neutral-700">{&post.category}</span>
                    }
                    if let Some(created_at) = &post.created_at {
                        <span>{format_date(created_at)}</span>
                    }
                    if let Some(duration) = &post.duration {
                        <span>{duration}</span>
                    }
                </div>
                <h3 class="mt-2 text-lg font-semibold text-neutral-900">{&post.title}</h3>
                <p class="mt-2 text-sm text-neutral-600">
                    {plain_text_excerpt(&post.content, 140)}
                </p>
            </div>
        </Link<Route>>
    }
}

/// The newest published posts.
#[function_component]
pub fn BlogPreviewSection() -> Html {
    let posts = use_fetch((), || async move {
        let query = PageQuery::new(1, PREVIEW_COUNT)
            .with_status(BlogStatus::Published.as_str());
        get_api_client().list_page::<Blog>(&query).await
    });

    let content = posts.render("blog posts", |page, _, _| {
        if page.data.is_empty() {
            return html! {
                <p class="text-center text-neutral-600">{"No posts yet."}</p>
            };
        }
        html! {
            <>
                <div class="grid gap-8 md:grid-cols-3">
                    {for page.data.iter().map(|post| html! {
                        <BlogCard key={post.id.to_string()} post={post.clone()} />
                    })}
                </div>
                <div class="mt-10 text-center">
                    <Link<Route> to={Route::Blog} classes="text-sm font-medium text-neutral-900 underline">
                        {"Read the blog"}
                    </Link<Route>>
                </div>
            </>
        }
    });

    html! {
        <Section title="From the Blog">{content}</Section>
    }
}
