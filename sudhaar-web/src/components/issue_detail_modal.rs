use crate::api::SudhaarClient;
use crate::browser;
use crate::components::alert::Alert;
use crate::components::form::bind_input;
use crate::components::image::FallbackImage;
use crate::components::status_badge::status_class;
use crate::models::app_state::AppState;
use chrono::Utc;
use gloo_timers::callback::Timeout;
use shared::models::{
    Comment, CreateCommentRequest, DeleteCommentRequest, Issue, IssueId, IssueStatus,
    UpdateStatusRequest, UserRole,
};
use shared::time::{format_display_date, format_time_ago};
use shared::validation::{DEFAULT_LOCATION, validate_comment};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Link copied by the share button.
pub fn share_url(origin: &str, id: IssueId) -> String {
    format!("{}/issue/{id}", origin.trim_end_matches('/'))
}

/// Comments of the issue on show. Writes are actions so replies that land
/// after an `.await` apply to the current thread, not the one they started from.
#[derive(Debug, Default, Clone, PartialEq)]
struct CommentThread {
    issue: Option<IssueId>,
    comments: Vec<Comment>,
}

enum ThreadAction {
    /// Start over for another issue (or none).
    Open(Option<IssueId>),
    /// Server listing for `issue`. Comments posted meanwhile stay on top.
    Loaded(IssueId, Vec<Comment>),
    Prepend(IssueId, Comment),
    Remove(IssueId, i64),
}

impl Reducible for CommentThread {
    type Action = ThreadAction;

    fn reduce(self: Rc<Self>, action: ThreadAction) -> Rc<Self> {
        let current = self.issue;
        match action {
            ThreadAction::Open(issue) => Rc::new(Self {
                issue,
                comments: Vec::new(),
            }),
            ThreadAction::Loaded(issue, listed) if current == Some(issue) => {
                let mut comments: Vec<Comment> = self
                    .comments
                    .iter()
                    .filter(|local| listed.iter().all(|comment| comment.id != local.id))
                    .cloned()
                    .collect();
                comments.extend(listed);
                Rc::new(Self {
                    issue: current,
                    comments,
                })
            }
            ThreadAction::Prepend(issue, comment) if current == Some(issue) => {
                let mut comments = Vec::with_capacity(self.comments.len() + 1);
                comments.push(comment);
                comments.extend(self.comments.iter().cloned());
                Rc::new(Self {
                    issue: current,
                    comments,
                })
            }
            ThreadAction::Remove(issue, comment_id) if current == Some(issue) => Rc::new(Self {
                issue: current,
                comments: self
                    .comments
                    .iter()
                    .filter(|comment| comment.id != comment_id)
                    .cloned()
                    .collect(),
            }),
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IssueDetailModalProps {
    /// The live feed entry; `None` keeps the modal closed.
    pub issue: Option<Issue>,
    #[prop_or_default]
    pub voting: bool,
    pub on_vote: Callback<IssueId>,
    pub on_close: Callback<()>,
    /// An official moved the issue to a new status.
    #[prop_or_default]
    pub on_updated: Option<Callback<Issue>>,
}

#[function_component(IssueDetailModal)]
pub fn issue_detail_modal(props: &IssueDetailModalProps) -> Html {
    let thread = use_reducer(CommentThread::default);
    let loading_comments = use_state(|| false);
    let comment_text = use_state(String::new);
    let comment_error = use_state(|| None::<String>);
    let copied = use_state(|| false);
    let status_choice = use_state(String::new);
    let updating_status = use_state(|| false);
    let role = use_selector(|state: &AppState| state.role().cloned());
    let is_official = (*role).as_ref() == Some(&UserRole::Official);

    let issue_id = props.issue.as_ref().map(|issue| issue.id);

    {
        let thread = thread.dispatcher();
        let loading_comments = loading_comments.clone();
        let comment_error = comment_error.clone();
        let comment_text = comment_text.clone();
        use_effect_with(issue_id, move |issue_id| {
            thread.dispatch(ThreadAction::Open(*issue_id));
            comment_error.set(None);
            comment_text.set(String::new());
            if let Some(id) = *issue_id {
                browser::lock_body_scroll(true);
                loading_comments.set(true);
                spawn_local(async move {
                    match SudhaarClient::shared().comments(id).await {
                        Ok(listed) => thread.dispatch(ThreadAction::Loaded(id, listed)),
                        Err(err) => log(&format!("Failed to fetch comments: {err}")),
                    }
                    loading_comments.set(false);
                });
            }
            move || browser::lock_body_scroll(false)
        });
    }

    let Some(issue) = props.issue.clone() else {
        return html! {};
    };
    let id = issue.id;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_vote = {
        let on_vote = props.on_vote.clone();
        let voting = props.voting;
        Callback::from(move |_: MouseEvent| {
            if !voting {
                on_vote.emit(id);
            }
        })
    };

    let on_share = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            spawn_local(async move {
                match browser::copy_text(&share_url(&browser::origin(), id)).await {
                    Ok(()) => {
                        copied.set(true);
                        let reset = copied.clone();
                        Timeout::new(2_000, move || reset.set(false)).forget();
                    }
                    Err(err) => log(&format!("Failed to copy: {err}")),
                }
            });
        })
    };

    let post_comment = {
        let thread = thread.dispatcher();
        let comment_text = comment_text.clone();
        let comment_error = comment_error.clone();
        Callback::from(move |()| {
            let Ok(text) = validate_comment(&comment_text) else {
                return;
            };
            comment_text.set(String::new());
            comment_error.set(None);
            let thread = thread.clone();
            let comment_text = comment_text.clone();
            let comment_error = comment_error.clone();
            spawn_local(async move {
                let request = CreateCommentRequest { text: text.clone() };
                match SudhaarClient::shared().post_comment(id, &request).await {
                    Ok(comment) => thread.dispatch(ThreadAction::Prepend(id, comment)),
                    Err(err) => {
                        comment_text.set(text);
                        comment_error.set(Some(format!("Failed to post comment: {}", err.user_message())));
                    }
                }
            });
        })
    };
    let on_comment_click = {
        let post_comment = post_comment.clone();
        Callback::from(move |_: MouseEvent| post_comment.emit(()))
    };
    let on_comment_key = Callback::from(move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            post_comment.emit(());
        }
    });

    let delete_comment = {
        let thread = thread.dispatcher();
        let comment_error = comment_error.clone();
        Callback::from(move |comment_id: i64| {
            if !browser::confirm("Delete this comment?") {
                return;
            }
            let thread = thread.clone();
            let comment_error = comment_error.clone();
            spawn_local(async move {
                let request = DeleteCommentRequest { comment_id };
                match SudhaarClient::shared().delete_comment(id, &request).await {
                    Ok(()) => thread.dispatch(ThreadAction::Remove(id, comment_id)),
                    Err(err) => comment_error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_status_change = {
        let status_choice = status_choice.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                status_choice.set(select.value());
            }
        })
    };
    let on_status_submit = {
        let status_choice = status_choice.clone();
        let updating_status = updating_status.clone();
        let comment_error = comment_error.clone();
        let on_updated = props.on_updated.clone();
        Callback::from(move |_: MouseEvent| {
            if status_choice.is_empty() {
                return;
            }
            let request = UpdateStatusRequest {
                status: IssueStatus::from(status_choice.as_str()),
                description: None,
            };
            updating_status.set(true);
            let updating_status = updating_status.clone();
            let comment_error = comment_error.clone();
            let on_updated = on_updated.clone();
            spawn_local(async move {
                match SudhaarClient::shared().update_status(id, &request).await {
                    Ok(updated) => {
                        if let Some(callback) = on_updated {
                            callback.emit(updated);
                        }
                    }
                    Err(err) => comment_error.set(Some(err.user_message())),
                }
                updating_status.set(false);
            });
        })
    };

    let author = issue.best_author().to_string();
    let initial: String = author.chars().take(1).collect();
    let location = if issue.location.trim().is_empty() {
        DEFAULT_LOCATION.to_string()
    } else {
        issue.location.clone()
    };
    let description = if issue.body().trim().is_empty() {
        "No description provided.".to_string()
    } else {
        issue.body().to_string()
    };
    let vote_label = if issue.upvotes == 1 { "Vote" } else { "Votes" };
    let vote_class = if issue.user_has_upvoted {
        "bg-blue-600 text-white"
    } else {
        "bg-slate-50 hover:bg-slate-100 text-slate-600"
    };
    let now = Utc::now();

    let comment_list = if *loading_comments {
        html! {
            <div class="flex justify-center p-4">
                <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-6 w-6 animate-spin text-slate-300" />
            </div>
        }
    } else if thread.comments.is_empty() {
        html! { <p class="text-center text-slate-400 text-sm py-4">{"No comments yet. Start the conversation!"}</p> }
    } else {
        html! {
            { for thread.comments.iter().map(|comment| {
                let official = comment.is_from_official();
                let comment_id = comment.id;
                let on_delete = {
                    let delete_comment = delete_comment.clone();
                    Callback::from(move |_: MouseEvent| delete_comment.emit(comment_id))
                };
                html! {
                    <div key={comment.id} class="flex gap-3">
                        <div class={classes!(
                            "h-8", "w-8", "rounded-full", "flex", "items-center", "justify-center", "text-xs", "font-bold", "shrink-0",
                            if official { "bg-blue-600 text-white shadow-md shadow-blue-200" } else { "bg-slate-900 text-white" }
                        )}>
                            if official {
                                <Icon icon_id={IconId::HeroiconsSolidCheckBadge} class="h-4 w-4" />
                            } else {
                                { comment.avatar() }
                            }
                        </div>
                        <div class={classes!(
                            "p-3", "rounded-xl", "text-sm", "flex-1",
                            if official { "bg-blue-50 border border-blue-100" } else { "bg-slate-50" }
                        )}>
                            <div class="flex justify-between items-start mb-1">
                                <div class="flex items-center gap-1.5">
                                    <span class={classes!("font-bold", "block", "text-xs", if official { "text-blue-700" } else { "text-slate-900" })}>
                                        { &comment.user_name }
                                    </span>
                                    if official {
                                        <span class="text-[10px] px-1.5 py-0.5 bg-blue-100 text-blue-600 rounded-md font-bold uppercase tracking-wide">{"Official"}</span>
                                    }
                                    <span class="text-[10px] text-slate-400">{ format!("• {}", format_time_ago(comment.created_at.as_deref(), now)) }</span>
                                </div>
                                if comment.is_own_comment {
                                    <button onclick={on_delete} title="Delete comment" class="text-slate-300 hover:text-red-500 transition-colors p-1">
                                        <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-3 w-3" />
                                    </button>
                                }
                            </div>
                            <p class={if official { "text-slate-800" } else { "text-slate-600" }}>{ &comment.text }</p>
                        </div>
                    </div>
                }
            }) }
        }
    };

    let status_editor = if is_official {
        html! {
            <div class="flex gap-2 items-center">
                <select class="select select-bordered select-sm flex-1" onchange={on_status_change}>
                    <option value="" selected={status_choice.is_empty()}>{"Change status..."}</option>
                    { for IssueStatus::KNOWN.iter().map(|status| html! {
                        <option value={status.as_str().to_string()} selected={*status_choice == status.as_str()}>
                            { status.as_str() }
                        </option>
                    }) }
                </select>
                <button
                    class="btn btn-sm btn-primary"
                    disabled={status_choice.is_empty() || *updating_status}
                    onclick={on_status_submit}
                >
                    { if *updating_status { "Updating..." } else { "Update" } }
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center px-4 py-4 sm:px-6">
            <div class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm" onclick={close.clone()} />
            <div class="relative w-full max-w-5xl bg-white rounded-3xl shadow-2xl overflow-hidden flex flex-col lg:flex-row max-h-[90vh]">
                <button onclick={close.clone()} title="Close" class="absolute top-4 right-4 z-10 p-2 bg-black/20 text-white rounded-full lg:hidden">
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="h-5 w-5" />
                </button>

                <div class="relative w-full lg:w-[55%] bg-slate-100 flex flex-col">
                    <div class="h-[300px] lg:h-full relative">
                        <FallbackImage src={issue.best_image().map(str::to_string)} alt={issue.title.clone()} class="h-full w-full" priority=true />
                        <div class="absolute top-4 left-4">
                            <span class={classes!("px-4", "py-1.5", "rounded-full", "text-xs", "font-bold", "text-white", "flex", "gap-2", "items-center", status_class(&issue.status))}>
                                <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="h-3.5 w-3.5" />
                                { issue.status.as_str() }
                            </span>
                        </div>
                    </div>
                </div>

                <div class="w-full lg:w-[45%] flex flex-col bg-white h-full max-h-[60vh] lg:max-h-[90vh]">
                    <div class="p-6 border-b border-slate-100 shrink-0 flex justify-between items-start">
                        <div>
                            <div class="flex items-center gap-2 mb-3">
                                <div class="h-10 w-10 rounded-full bg-slate-900 text-white flex items-center justify-center text-sm font-bold">{ initial }</div>
                                <div>
                                    <h4 class="font-bold text-slate-900 text-sm">{ author }</h4>
                                    <p class="text-xs text-slate-400">{ format!("{location} • {}", format_display_date(issue.created_at.as_deref())) }</p>
                                </div>
                            </div>
                            <h2 class="text-2xl font-black text-slate-900 mb-2">{ &issue.title }</h2>
                        </div>
                        <button onclick={close} title="Close" class="hidden lg:flex p-2 hover:bg-slate-100 rounded-full">
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="h-6 w-6" />
                        </button>
                    </div>

                    <div class="flex-1 overflow-y-auto p-6 space-y-6">
                        <p class="text-slate-600 leading-relaxed">{ description }</p>
                        { status_editor }
                        <div class="flex gap-4 border-y border-slate-50 py-4">
                            <button
                                onclick={on_vote}
                                disabled={props.voting}
                                class={classes!("flex-1", "flex", "justify-center", "items-center", "gap-2", "font-bold", "text-sm", "py-2.5", "rounded-xl", "transition-all", vote_class)}
                            >
                                if props.voting {
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-4 w-4 animate-spin" />
                                } else if issue.user_has_upvoted {
                                    <Icon icon_id={IconId::HeroiconsSolidHeart} class="h-4 w-4" />
                                } else {
                                    <Icon icon_id={IconId::HeroiconsOutlineHeart} class="h-4 w-4" />
                                }
                                { format!("{} {vote_label}", issue.upvotes) }
                            </button>
                            <button onclick={on_share} class="flex-1 flex justify-center gap-2 font-bold text-sm bg-slate-50 hover:bg-slate-100 py-2.5 rounded-xl text-slate-600">
                                <Icon icon_id={IconId::HeroiconsOutlineShare} class="h-4 w-4" />
                                { if *copied { "Copied!" } else { "Share" } }
                            </button>
                        </div>
                        if let Some(message) = &*comment_error {
                            <Alert message={message.clone()} />
                        }
                        <div class="space-y-4">{ comment_list }</div>
                    </div>

                    <div class="p-4 border-t border-slate-100 bg-white shrink-0 relative">
                        <input
                            type="text"
                            placeholder="Write a comment..."
                            class="input input-bordered w-full pl-4 pr-12 bg-slate-50 text-sm"
                            value={(*comment_text).clone()}
                            oninput={bind_input(&comment_text)}
                            onkeydown={on_comment_key}
                        />
                        <button onclick={on_comment_click} title="Send" class="absolute right-6 top-6 text-blue-600 hover:text-blue-700">
                            <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="h-4 w-4" />
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, text: &str) -> Comment {
        Comment {
            id,
            text: text.into(),
            ..Comment::default()
        }
    }

    fn ids(thread: &CommentThread) -> Vec<i64> {
        thread.comments.iter().map(|comment| comment.id).collect()
    }

    fn loaded(issue: IssueId, listed: Vec<Comment>) -> Rc<CommentThread> {
        Rc::new(CommentThread::default())
            .reduce(ThreadAction::Open(Some(issue)))
            .reduce(ThreadAction::Loaded(issue, listed))
    }

    #[test]
    fn test_back_to_back_deletes_both_stick() {
        let thread = loaded(4, vec![comment(1, "a"), comment(2, "b"), comment(3, "c")])
            .reduce(ThreadAction::Remove(4, 1))
            .reduce(ThreadAction::Remove(4, 2));
        assert_eq!(ids(&thread), vec![3]);
    }

    #[test]
    fn test_comment_posted_before_load_survives_listing() {
        let thread = Rc::new(CommentThread::default())
            .reduce(ThreadAction::Open(Some(4)))
            .reduce(ThreadAction::Prepend(4, comment(9, "first!")))
            .reduce(ThreadAction::Loaded(4, vec![comment(1, "a"), comment(2, "b")]));
        assert_eq!(ids(&thread), vec![9, 1, 2]);

        let relisted = thread.reduce(ThreadAction::Loaded(4, vec![comment(9, "first!"), comment(1, "a")]));
        assert_eq!(ids(&relisted), vec![9, 1]);
    }

    #[test]
    fn test_replies_for_a_closed_issue_are_dropped() {
        let thread = loaded(4, vec![comment(1, "a")]).reduce(ThreadAction::Open(Some(5)));
        let thread = thread
            .reduce(ThreadAction::Loaded(4, vec![comment(2, "stale")]))
            .reduce(ThreadAction::Prepend(4, comment(3, "stale")));
        assert_eq!(thread.issue, Some(5));
        assert!(thread.comments.is_empty());
    }

    #[test]
    fn test_share_url() {
        assert_eq!(share_url("https://sudhaar.pk", 12), "https://sudhaar.pk/issue/12");
        assert_eq!(share_url("http://localhost:8080/", 3), "http://localhost:8080/issue/3");
    }
}
