// File: src/like.rs
// Purpose: Like/unlike round trip for a rendered like button

use crate::source::LikeBackend;
use adw_api::ApiError;
use adw_components::LikeButton;

/// Sends the toggle for `button` and returns it updated with the server's answer
///
/// On failure the caller keeps the old button untouched.
pub async fn toggle_like(
    backend: &impl LikeBackend,
    button: &LikeButton,
) -> Result<LikeButton, ApiError> {
    tracing::debug!(
        "{} {} {}",
        button.toggle_action(),
        button.item_type,
        button.item_id
    );
    let answer = backend
        .toggle_like(button.liked, &button.item_type, &button.item_id)
        .await?;

    let mut updated = button.clone();
    updated.apply(answer.user_has_liked, answer.new_like_count);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adw_api::LikeToggle;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl LikeBackend for FakeBackend {
        async fn toggle_like(
            &self,
            liked: bool,
            item_type: &str,
            item_id: &str,
        ) -> Result<LikeToggle, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("{}/{}/{}", liked, item_type, item_id));
            if self.fail {
                return Err(ApiError::Status {
                    status: 403,
                    url: "/like".to_string(),
                });
            }
            Ok(LikeToggle {
                user_has_liked: !liked,
                new_like_count: if liked { 4 } else { 6 },
            })
        }
    }

    #[tokio::test]
    async fn test_like_updates_state() {
        let backend = FakeBackend::default();
        let button = LikeButton::new("post", "42").with_state(false, 5);

        let updated = toggle_like(&backend, &button).await.unwrap();

        assert_eq!(*backend.calls.borrow(), vec!["false/post/42".to_string()]);
        assert!(updated.liked);
        assert_eq!(updated.like_count, 6);
        assert_eq!(updated.toggle_action(), "unlike");
    }

    #[tokio::test]
    async fn test_failure_keeps_button() {
        let backend = FakeBackend {
            fail: true,
            ..FakeBackend::default()
        };
        let button = LikeButton::new("comment", "3").with_state(true, 5);

        let err = toggle_like(&backend, &button).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(button.liked);
    }
}
