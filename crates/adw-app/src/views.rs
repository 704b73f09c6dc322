// File: src/views.rs
// Purpose: Maud templates for each routable view

use crate::settings::{AccentColor, Settings, Theme};
use adw_api::{FeedPage, Post};
use adw_components::{
    Appearance, Button, Component, HeaderBar, LikeButton, Spinner, SpinnerSize, StatusPage,
};
use adw_dom::Element;
use maud::{html, Markup};

/// Feed listing, newest first
pub fn feed(page: &FeedPage, page_no: u32) -> Markup {
    let header = HeaderBar::new("Feed").with_end(
        Button::new("New Post")
            .icon("document-new-symbolic")
            .appearance(Appearance::Suggested)
            .href("#/posts/new")
            .render(),
    );

    html! {
        section.adw-view.feed-view data-view="feed" {
            (header.render())
            @if page.items.is_empty() {
                (StatusPage::new("No Posts Yet")
                    .description("Posts from people you follow show up here.")
                    .icon("document-edit-symbolic")
                    .render())
            } @else {
                div.feed-list {
                    @for post in page.posts() {
                        (post_card(post, true))
                    }
                }
            }
            (pagination(page_no, page.has_next))
        }
    }
}

/// Single post with its author in the header bar
pub fn post(post: &Post) -> Markup {
    let header = HeaderBar {
        subtitle: Some(format_date(post)),
        ..HeaderBar::new(post.author.full_name.as_str())
    }
    .with_start(
        Button::new("Back")
            .icon("go-previous-symbolic")
            .appearance(Appearance::Flat)
            .href("#/feed")
            .render(),
    );

    html! {
        section.adw-view.post-view data-view="post" data-post-id=(post.id) {
            (header.render())
            (post_card(post, false))
        }
    }
}

pub fn login() -> Markup {
    html! {
        section.adw-view.auth-view data-view="login" {
            adw-header-bar title="Log In" {}
            form #login-form.adw-form data-form="login" {
                (entry("Username", "username", "text", "username"))
                (entry("Password", "password", "password", "current-password"))
                (submit_button("Log In"))
                p.auth-switch {
                    "No account yet? "
                    a href="#/register" { "Create one" }
                }
            }
        }
    }
}

pub fn register() -> Markup {
    html! {
        section.adw-view.auth-view data-view="register" {
            adw-header-bar title="Create Account" {}
            form #register-form.adw-form data-form="register" {
                (entry("Full Name", "full_name", "text", "name"))
                (entry("Username", "username", "text", "username"))
                (entry("Email", "email", "email", "email"))
                (entry("Password", "password", "password", "new-password"))
                (submit_button("Create Account"))
                p.auth-switch {
                    "Already registered? "
                    a href="#/login" { "Log in" }
                }
            }
        }
    }
}

/// Theme and accent pickers; placeholders are upgraded by the dispatcher
pub fn settings(current: Settings) -> Markup {
    html! {
        section.adw-view.settings-view data-view="settings" {
            adw-header-bar title="Settings" {}
            div.adw-preferences-group {
                h2.adw-preferences-group-title { "Appearance" }
                adw-box orientation="horizontal" spacing="6" role="radiogroup" aria-label="Theme" {
                    @for theme in Theme::ALL {
                        adw-button
                            appearance=[(theme == current.theme).then_some("suggested")]
                            role="radio"
                            aria-checked=(checked(theme == current.theme))
                            data-theme-choice=(theme.as_str())
                            label=(theme.label()) {}
                    }
                }
                h3.adw-preferences-group-title { "Accent Color" }
                div.accent-swatches role="radiogroup" aria-label="Accent color" {
                    @for color in AccentColor::ALL {
                        button
                            type="button"
                            class=(swatch_class(color, current.accent_color))
                            role="radio"
                            aria-checked=(checked(color == current.accent_color))
                            aria-label=(color.as_str())
                            data-accent-choice=(color.as_str()) {}
                    }
                }
            }
        }
    }
}

/// Fallback for paths no route matches
pub fn not_found() -> Markup {
    let page = StatusPage::new("Page Not Found")
        .description("Error 404: nothing lives at this address.")
        .icon("dialog-question-symbolic")
        .action(
            Button::new("Back to Feed")
                .appearance(Appearance::Suggested)
                .href("#/feed")
                .render(),
        );

    html! {
        section.adw-view.not-found-view data-view="not-found" data-status="404" {
            (page.render())
        }
    }
}

/// Shown while a remote view is loading
pub fn loading() -> Markup {
    let spinner = Spinner {
        size: SpinnerSize::Large,
        active: true,
    };
    html! {
        div.adw-view.loading-view {
            (spinner.render())
        }
    }
}

fn post_card(post: &Post, link: bool) -> Markup {
    let like = LikeButton::new(post.kind.as_str(), post.id.to_string())
        .with_state(post.user_has_liked, post.like_count);
    let has_terms = !post.categories.is_empty() || !post.tags.is_empty();

    html! {
        article.adw-card.post-card data-post-id=(post.id) {
            header.post-meta {
                a.post-author href=(format!("#/profile/{}", post.author.id)) {
                    (post.author.full_name)
                }
                time datetime=(post.created_at.to_rfc3339()) { (format_date(post)) }
            }
            div.post-content { (post.content) }
            @if has_terms {
                ul.post-terms {
                    @for category in &post.categories {
                        li.post-category data-slug=(category.slug) { (category.name) }
                    }
                    @for tag in &post.tags {
                        li.post-tag data-slug=(tag.slug) { "#" (tag.name) }
                    }
                }
            }
            footer.post-actions {
                (like.render())
                @if link {
                    (Button::new("Open")
                        .appearance(Appearance::Flat)
                        .href(format!("#/posts/{}", post.id))
                        .render())
                }
            }
        }
    }
}

fn pagination(page_no: u32, has_next: bool) -> Markup {
    html! {
        @if page_no > 1 || has_next {
            nav.adw-pagination aria-label="Pages" {
                @if page_no > 1 {
                    (Button::new("Newer").href(format!("#/feed/page/{}", page_no - 1)).render())
                }
                @if has_next {
                    (Button::new("Older").href(format!("#/feed/page/{}", page_no + 1)).render())
                }
            }
        }
    }
}

fn entry(label: &str, name: &str, kind: &str, autocomplete: &str) -> Markup {
    html! {
        label.adw-entry-row {
            span.adw-entry-label { (label) }
            input.adw-entry type=(kind) name=(name) autocomplete=(autocomplete) required;
        }
    }
}

fn submit_button(label: &str) -> Element {
    let mut button = Button::new(label)
        .appearance(Appearance::Suggested)
        .render();
    button.set_attr("type", "submit");
    button
}

fn format_date(post: &Post) -> String {
    post.created_at.format("%B %-d, %Y").to_string()
}

fn checked(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

fn swatch_class(color: AccentColor, current: AccentColor) -> String {
    if color == current {
        format!("accent-swatch accent-{} selected", color)
    } else {
        format!("accent-swatch accent-{}", color)
    }
}
