//! Notice Banner Component
//!
//! Shows the current confirmation or error and clears it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_DISMISS_MS;
use crate::context::use_inventory;
use crate::state::NoticeKind;

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctrl = use_inventory();
    let state = *ctrl.state();
    let notice = Memo::new(move |_| state.with(|s| s.notice.clone()));

    // Each notice gets its own timer; dismissing by seq leaves newer ones alone
    let timer_ctrl = ctrl.clone();
    Effect::new(move |_| {
        if let Some(seq) = notice.get().map(|n| n.seq) {
            let ctrl = timer_ctrl.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                ctrl.dismiss_notice(seq);
            });
        }
    });

    move || {
        notice.get().map(|n| {
            let seq = n.seq;
            let ctrl = ctrl.clone();
            view! {
                <div class=notice_class(n.kind) role="alert">
                    <span>{n.text}</span>
                    <button class="notice-close" on:click=move |_| ctrl.dismiss_notice(seq)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
