//! Dioxus desktop GUI.
use crate::api::TranslationService;
use crate::catalog::{keep_selected, picker_options};
use crate::clipboard::SystemClipboard;
use crate::i18n::LocaleContext;
use crate::lang::MessageKey;
use crate::locale::list_ui_locales;
use crate::theme::ThemeState;
use crate::translator::{Notice, NoticeKind, TranslatorCard, COPIED_RESET};
use anyhow::Result;
use dioxus::prelude::*;
use parking_lot::Mutex;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Layout and widgets; colours come from the active theme's custom properties.
const BASE_CSS: &str = r#":root {
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --focus-ring: 0 0 0 2px rgba(61,130,247,0.35);
    --transition: .16s cubic-bezier(.4,0,.2,1);
}
html,body { margin:0; background:var(--color-bg); color:var(--color-text); font-family: 'Inter', 'SF Pro Text', 'Segoe UI', Arial, Helvetica, sans-serif; -webkit-font-smoothing:antialiased; }
body,div,span,label { box-sizing:border-box; }
input,select,textarea { background:var(--color-panel); color:var(--color-text); border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:6px 8px; font-size:13px; font-family:inherit; line-height:1.25; transition:var(--transition); }
input:hover,select:hover,textarea:hover { border-color:var(--color-border-hover); }
input:focus,select:focus,textarea:focus { outline:none; border-color:var(--color-accent); box-shadow:var(--focus-ring); }
button { background:var(--color-panel); color:var(--color-text); border:1px solid var(--color-border); border-radius:var(--radius-sm); padding:6px 14px; font-size:13px; cursor:pointer; font-weight:500; letter-spacing:.2px; display:inline-flex; align-items:center; justify-content:center; gap:6px; transition:var(--transition); }
button:hover { background:var(--color-panel-alt); border-color:var(--color-border-hover); }
button:active { transform:translateY(1px); }
button:focus { outline:none; box-shadow:var(--focus-ring); }
button:disabled { opacity:.45; cursor:not-allowed; }
button.primary { background:var(--color-accent); border-color:var(--color-accent); color:#fff; min-width:200px; padding:10px 18px; font-size:15px; }
button.primary:hover { background:var(--color-accent-hover); }
select { cursor:pointer; }
textarea { width:100%; min-height:250px; resize:none; padding:36px 14px 14px 14px; font-size:15px; border-radius:var(--radius-lg); }
.pane { position:relative; }
.pane-label { position:absolute; top:12px; inset-inline-start:16px; font-size:11px; font-weight:600; letter-spacing:.5px; text-transform:uppercase; color:var(--color-text-dim); }
.pane-footer { position:absolute; bottom:10px; inset-inline-end:12px; font-size:11px; color:var(--color-text-dim); display:flex; align-items:center; gap:6px; }
.result { min-height:250px; padding:36px 14px 48px 14px; font-size:15px; background:var(--color-panel); border:1px solid var(--color-border); border-radius:var(--radius-lg); white-space:pre-wrap; }
.result.placeholder { color:var(--color-text-dim); font-style:italic; }
.picker { display:flex; flex-direction:column; gap:6px; flex:1; }
.picker label { font-size:12px; color:var(--color-text-dim); font-weight:500; }
.picker-empty { font-size:12px; color:var(--color-text-dim); padding:6px 2px; }
.toast { min-width:260px; max-width:360px; background:var(--color-panel); border:1px solid var(--color-border); border-radius:var(--radius-md); padding:10px 12px; display:flex; flex-direction:column; gap:4px; }
.toast.destructive { border-color:var(--color-danger); }
.toast-title { font-weight:600; font-size:13px; }
.toast-body { font-size:12px; color:var(--color-text-dim); }
.copied { color:var(--color-success); }
"#;

/// Auto-dismiss delay for toasts.
const TOAST_TTL: Duration = Duration::from_secs(4);

static NEXT_TOAST: AtomicU64 = AtomicU64::new(0);

/// Everything the view needs from outside, injected as root context.
#[derive(Clone)]
pub struct Services {
    pub locale: LocaleContext,
    pub theme: ThemeState,
    pub translator: Arc<dyn TranslationService>,
    /// Opened once at startup; `None` when the platform has no clipboard.
    pub clipboard: Arc<Mutex<Option<SystemClipboard>>>,
}

/// Launch the desktop application.
pub fn run(services: Services) -> Result<()> {
    let title = services.locale.t(MessageKey::AppTitle);
    let cfg = dioxus_desktop::Config::default()
        .with_window(dioxus_desktop::WindowBuilder::new().with_title(title));
    dioxus_desktop::launch::launch(
        app,
        vec![Box::new(move || Box::new(services.clone()) as Box<dyn Any>)],
        vec![Box::new(cfg)],
    );
}

/// Show a toast and schedule its removal.
fn push_notice(mut toasts: Signal<Vec<(u64, Notice)>>, notice: Notice) {
    let id = NEXT_TOAST.fetch_add(1, Ordering::Relaxed);
    toasts.write().push((id, notice));
    spawn(async move {
        tokio::time::sleep(TOAST_TTL).await;
        toasts.write().retain(|(i, _)| *i != id);
    });
}

/// Root component: page direction, header controls, translator card, toasts.
fn app() -> Element {
    let services = use_context::<Services>();
    let ctx = services.locale.clone();
    // Signals mirror the shared locale/theme state so a switch re-renders every label.
    let mut locale = use_signal(|| ctx.active_locale());
    let mut theme = use_signal(|| services.theme.current());
    let mut card = use_signal(TranslatorCard::default);
    let toasts = use_signal(Vec::<(u64, Notice)>::new);

    let cur_locale = *locale.read();
    let cur_theme = *theme.read();
    let t = |k: MessageKey| ctx.t(k);
    let dir = ctx.direction();

    // Window title follows the interface language.
    let window = dioxus_desktop::use_window();
    {
        let ctx = ctx.clone();
        use_effect(move || {
            let _ = locale.read();
            window.set_title(&ctx.t(MessageKey::AppTitle));
        });
    }

    let on_locale = {
        let ctx = ctx.clone();
        move |e: Event<FormData>| match ctx.set_active_locale_str(&e.value()) {
            Ok(code) => locale.set(code),
            Err(err) => tracing::warn!(error = %err, "ignoring locale selection"),
        }
    };
    let on_theme = {
        let theme_state = services.theme.clone();
        move |_: Event<MouseData>| theme.set(theme_state.toggle())
    };
    let on_translate = {
        let ctx = ctx.clone();
        let svc = services.translator.clone();
        move |_: Event<MouseData>| {
            let begun = card.write().begin_translate(&ctx);
            match begun {
                Err(notice) => push_notice(toasts, notice),
                Ok(req) => {
                    let ctx = ctx.clone();
                    let svc = svc.clone();
                    spawn(async move {
                        let result = svc.translate(&req.text, &req.source_language, &req.target_language).await;
                        let notice = card.write().finish_translate(&ctx, result);
                        push_notice(toasts, notice);
                    });
                }
            }
        }
    };
    let on_copy = {
        let ctx = ctx.clone();
        let clipboard = services.clipboard.clone();
        move |_: Event<MouseData>| {
            let notice = card.write().copy_translation(&mut *clipboard.lock(), &ctx);
            if let Some(notice) = notice {
                let copied = notice.kind == NoticeKind::Info;
                push_notice(toasts, notice);
                if copied {
                    spawn(async move {
                        tokio::time::sleep(COPIED_RESET).await;
                        card.write().reset_copied();
                    });
                }
            }
        }
    };

    let c = card.read();
    let theme_label = t(cur_theme.toggle_label());
    let source_name = c.source_language_name().to_string();
    let target_name = c.target_language_name().to_string();
    let char_count = format!("{} {}", c.source_char_count(), t(MessageKey::Characters));
    let copied_label = format!("✓ {}", t(MessageKey::Copied));

    rsx! {
        style { {cur_theme.css_tokens()} }
        style { {BASE_CSS} }
        main { dir: dir.as_str(), style: "min-height:100vh;padding:32px 16px;display:flex;flex-direction:column;align-items:center;",
            // Controls pinned to the top corner
            div { style: "position:fixed;top:14px;inset-inline-end:14px;display:flex;align-items:center;gap:8px;z-index:50;",
                select { title: t(MessageKey::LanguageSwitcher), value: cur_locale.as_str(), oninput: on_locale,
                    { list_ui_locales().iter().map(|l| {
                        let label = format!("{} ({})", l.native_name, l.name);
                        let code = l.code;
                        rsx!( option { key: "{code}", value: code.as_str(), selected: code == cur_locale, "{label}" } )
                    }) }
                }
                button { title: t(MessageKey::ToggleTheme), onclick: on_theme, "{theme_label}" }
            }
            div { style: "width:100%;max-width:980px;display:flex;flex-direction:column;gap:20px;",
                div { style: "text-align:center;",
                    h1 { style: "font-size:40px;margin:8px 0 10px 0;", {t(MessageKey::AppTitle)} }
                    p { style: "color:var(--color-text-dim);font-size:16px;margin:0 auto;max-width:460px;", {t(MessageKey::AppDescription)} }
                }
                div { class: "panel", style: panel_style(),
                    div { style: "display:flex;align-items:flex-end;gap:14px;",
                        LanguagePicker {
                            label: t(MessageKey::From),
                            value: c.source_language.clone(),
                            exclude: c.target_language.clone(),
                            search_hint: t(MessageKey::SearchLanguages),
                            select_hint: t(MessageKey::SelectLanguage),
                            empty_hint: t(MessageKey::NoLanguageFound),
                            on_change: move |code: String| card.write().set_source_language(&code),
                        }
                        button { title: t(MessageKey::SwapLanguages), style: "border-radius:50%;width:42px;height:42px;padding:0;font-size:18px;",
                            onclick: move |_| card.write().swap(), "⇄"
                        }
                        LanguagePicker {
                            label: t(MessageKey::To),
                            value: c.target_language.clone(),
                            exclude: c.source_language.clone(),
                            search_hint: t(MessageKey::SearchLanguages),
                            select_hint: t(MessageKey::SelectLanguage),
                            empty_hint: t(MessageKey::NoLanguageFound),
                            on_change: move |code: String| card.write().set_target_language(&code),
                        }
                    }
                    div { style: "display:grid;grid-template-columns:1fr 1fr;gap:14px;",
                        div { class: "pane",
                            span { class: "pane-label", "{source_name}" }
                            textarea { value: c.source_text.clone(), placeholder: t(MessageKey::EnterText),
                                oninput: move |e| card.write().set_source_text(e.value()),
                            }
                            div { class: "pane-footer", "{char_count}" }
                        }
                        div { class: "pane",
                            span { class: "pane-label", "{target_name}" }
                            if c.is_translating {
                                div { class: "result placeholder", {t(MessageKey::Translating)} }
                            } else if c.translated_text.is_empty() {
                                div { class: "result placeholder", {t(MessageKey::TranslationWillAppear)} }
                            } else {
                                div { class: "result", {c.translated_text.clone()} }
                                div { class: "pane-footer",
                                    button { onclick: on_copy,
                                        if c.copied {
                                            span { class: "copied", "{copied_label}" }
                                        } else {
                                            span { {t(MessageKey::Copy)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { style: "display:flex;justify-content:center;",
                        button { class: "primary", disabled: !c.can_translate(), onclick: on_translate,
                            if c.is_translating { {t(MessageKey::Translating)} } else { {t(MessageKey::Translate)} }
                        }
                    }
                }
            }
            // Toast stack
            div { style: "position:fixed;bottom:16px;inset-inline-end:16px;display:flex;flex-direction:column;gap:8px;z-index:60;",
                { toasts.read().iter().map(|(id, n)| {
                    let id = *id;
                    let class = if n.kind == NoticeKind::Destructive { "toast destructive" } else { "toast" };
                    let title = n.title.clone();
                    let description = n.description.clone();
                    let mut toasts = toasts;
                    rsx!(
                        div { key: "{id}", class: class,
                            div { class: "toast-title", "{title}" }
                            div { class: "toast-body", "{description}" }
                            button { style: "align-self:flex-end;font-size:11px;padding:2px 8px;",
                                onclick: move |_| toasts.write().retain(|(i, _)| *i != id),
                                {t(MessageKey::Dismiss)}
                            }
                        }
                    )
                }) }
            }
        }
    }
}

/// Searchable picker over the content languages, minus the opposite selection.
#[component]
fn LanguagePicker(
    label: String,
    value: String,
    exclude: String,
    search_hint: String,
    select_hint: String,
    empty_hint: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut query = use_signal(String::new);
    let matches = picker_options(&exclude, &query.read());
    // The current choice is always listed so the select mirrors the card state.
    let options = keep_selected(&matches, &value);
    rsx! {
        div { class: "picker",
            label { "{label}" }
            input { r#type: "search", placeholder: "{search_hint}", value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            select { title: "{select_hint}", value: "{value}", oninput: move |e| on_change.call(e.value()),
                { options.iter().map(|l| {
                    let text = format!("{} · {}", l.name, l.native_name);
                    let code = l.code;
                    rsx!( option { key: "{code}", value: code, selected: code == value, "{text}" } )
                }) }
            }
            if matches.is_empty() {
                div { class: "picker-empty", "{empty_hint}" }
            }
        }
    }
}

/// Shared inline style for panel container.
fn panel_style() -> &'static str {
    "position:relative;border:1px solid var(--color-border);padding:18px 16px 16px 16px;border-radius:var(--radius-lg);display:flex;flex-direction:column;gap:16px;background:var(--color-panel);"
}
