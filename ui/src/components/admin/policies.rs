use payloads::{
    PolicyKind, PrivacyPolicy, PrivacyPolicyDocument, RefundPolicy,
    RefundPolicyDocument, TermsDocument, TermsOfService,
};
use yew::prelude::*;

use super::SingletonEditor;

#[derive(Clone, Copy, PartialEq)]
enum PolicyTab {
    Privacy,
    Refund,
    Terms,
}

impl PolicyTab {
    fn label(&self) -> &'static str {
        match self {
            Self::Privacy => PrivacyPolicy::LABEL,
            Self::Refund => RefundPolicy::LABEL,
            Self::Terms => TermsOfService::LABEL,
        }
    }
}

#[function_component]
pub fn PoliciesEditor() -> Html {
    let tab = use_state(|| PolicyTab::Privacy);

    html! {
        <div class="space-y-6">
            <div class="flex gap-2 border-b border-neutral-200">
                {for [PolicyTab::Privacy, PolicyTab::Refund, PolicyTab::Terms]
                    .into_iter()
                    .map(|option| {
                        let onclick = {
                            let tab = tab.clone();
                            Callback::from(move |_: MouseEvent| tab.set(option))
                        };
                        let class = if *tab == option {
                            "px-4 py-2 text-sm font-medium border-b-2 \
                             border-neutral-900 text-neutral-900"
                        } else {
                            "px-4 py-2 text-sm text-neutral-600 \
                             hover:text-neutral-900"
                        };
                        html! { <button {onclick} {class}>{option.label()}</button> }
                    })}
            </div>
            // keyed so each policy gets its own form state
            {match *tab {
                PolicyTab::Privacy => html! {
                    <SingletonEditor<PrivacyPolicyDocument> key="privacy" />
                },
                PolicyTab::Refund => html! {
                    <SingletonEditor<RefundPolicyDocument> key="refund" />
                },
                PolicyTab::Terms => html! {
                    <SingletonEditor<TermsDocument> key="terms" />
                },
            }}
        </div>
    }
}
