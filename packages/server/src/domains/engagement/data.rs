use serde::{Deserialize, Serialize};

use crate::common::{BlogError, BlogResult, CommentId};
use crate::domains::engagement::models::{Comment, PostCounters};

/// Author shown when a commenter leaves the name blank.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Views, likes and comments of one post as returned to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub views: i64,
    pub likes: i64,
    pub comments: Vec<CommentData>,
}

impl EngagementSnapshot {
    pub fn new(counters: PostCounters, comments: Vec<Comment>) -> Self {
        Self {
            views: counters.views,
            likes: counters.likes,
            comments: comments.into_iter().map(CommentData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    pub id: String,
    pub author: String,
    pub text: String,
    /// RFC 3339 creation time
    pub date: String,
}

impl From<Comment> for CommentData {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.author,
            text: comment.text,
            date: comment.created_at.to_rfc3339(),
        }
    }
}

/// A validated comment submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentInput {
    pub text: String,
    pub author: String,
}

impl CommentInput {
    /// Require non-blank text; fall back to the anonymous author.
    pub fn new(text: Option<String>, author: Option<String>) -> BlogResult<Self> {
        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| BlogError::validation("Comment text is required"))?;

        let author = author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        Ok(Self { text, author })
    }
}

/// Body of `POST /engagement`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngagementRequest {
    pub slug: Option<String>,
    pub action: Option<String>,
    #[serde(default)]
    pub payload: Option<EngagementPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngagementPayload {
    pub text: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "commentId")]
    pub comment_id: Option<String>,
}

/// One engagement mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngagementAction {
    View,
    Like,
    Comment(CommentInput),
    DeleteComment(CommentId),
}

impl EngagementAction {
    /// Parse the `action` name and its payload.
    pub fn parse(action: &str, payload: Option<EngagementPayload>) -> BlogResult<Self> {
        let payload = payload.unwrap_or_default();
        match action {
            "view" => Ok(Self::View),
            "like" => Ok(Self::Like),
            "comment" => CommentInput::new(payload.text, payload.author).map(Self::Comment),
            "delete-comment" => {
                let raw = payload
                    .comment_id
                    .filter(|id| !id.trim().is_empty())
                    .ok_or_else(|| BlogError::validation("Comment ID is required"))?;
                CommentId::parse(&raw)
                    .map(Self::DeleteComment)
                    .map_err(|_| BlogError::validation("Invalid comment ID"))
            }
            _ => Err(BlogError::validation("Invalid action")),
        }
    }

}

/// Action names reserved for the editor.
const EDITOR_ACTIONS: &[&str] = &["delete-comment"];

impl EngagementRequest {
    /// Whether the named action is an editor-only moderation action.
    ///
    /// Looks at the action name alone, so callers can check access before the
    /// payload is validated.
    pub fn requires_editor(&self) -> bool {
        self.action
            .as_deref()
            .map(str::trim)
            .is_some_and(|action| EDITOR_ACTIONS.contains(&action))
    }

    /// Split into the target slug and the parsed action.
    pub fn into_parts(self) -> BlogResult<(String, EngagementAction)> {
        let slug = self.slug.filter(|s| !s.trim().is_empty());
        let action = self.action.filter(|a| !a.trim().is_empty());
        let (Some(slug), Some(action)) = (slug, action) else {
            return Err(BlogError::validation("Slug and action are required"));
        };

        let action = EngagementAction::parse(action.trim(), self.payload)?;
        Ok((slug, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> EngagementRequest {
        serde_json::from_str(json).unwrap()
    }

    fn validation_message(err: BlogError) -> String {
        match err {
            BlogError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_comment_defaults_to_anonymous() {
        let input = CommentInput::new(Some("hi".into()), None).unwrap();
        assert_eq!(input.author, ANONYMOUS_AUTHOR);

        let input = CommentInput::new(Some("hi".into()), Some("   ".into())).unwrap();
        assert_eq!(input.author, ANONYMOUS_AUTHOR);

        let input = CommentInput::new(Some("hi".into()), Some(" Lin ".into())).unwrap();
        assert_eq!(input.author, "Lin");
    }

    #[test]
    fn test_comment_requires_text() {
        assert!(CommentInput::new(None, Some("Lin".into())).is_err());
        assert!(CommentInput::new(Some(" \n ".into()), None).is_err());
    }

    #[test]
    fn test_parse_simple_actions() {
        let (slug, action) = request(r#"{"slug":"a","action":"view"}"#).into_parts().unwrap();
        assert_eq!(slug, "a");
        assert_eq!(action, EngagementAction::View);

        let (_, action) = request(r#"{"slug":"a","action":"like"}"#).into_parts().unwrap();
        assert_eq!(action, EngagementAction::Like);
    }

    #[test]
    fn test_parse_comment_action() {
        let (_, action) =
            request(r#"{"slug":"a","action":"comment","payload":{"text":"nice","author":"Bo"}}"#)
                .into_parts()
                .unwrap();
        assert_eq!(
            action,
            EngagementAction::Comment(CommentInput {
                text: "nice".into(),
                author: "Bo".into()
            })
        );
    }

    #[test]
    fn test_parse_comment_without_payload() {
        let err = request(r#"{"slug":"a","action":"comment"}"#)
            .into_parts()
            .unwrap_err();
        assert_eq!(validation_message(err), "Comment text is required");
    }

    #[test]
    fn test_parse_delete_comment() {
        let id = CommentId::new();
        let json = format!(
            r#"{{"slug":"a","action":"delete-comment","payload":{{"commentId":"{}"}}}}"#,
            id
        );
        let req = request(&json);
        assert!(req.requires_editor());
        let (_, action) = req.into_parts().unwrap();
        assert_eq!(action, EngagementAction::DeleteComment(id));
    }

    #[test]
    fn test_requires_editor_ignores_payload() {
        assert!(request(r#"{"slug":"a","action":"delete-comment","payload":{"commentId":"42"}}"#)
            .requires_editor());
        assert!(request(r#"{"action":" delete-comment "}"#).requires_editor());
        assert!(!request(r#"{"slug":"a","action":"comment"}"#).requires_editor());
        assert!(!request(r#"{"slug":"a"}"#).requires_editor());
    }

    #[test]
    fn test_parse_delete_comment_errors() {
        let err = request(r#"{"slug":"a","action":"delete-comment"}"#)
            .into_parts()
            .unwrap_err();
        assert_eq!(validation_message(err), "Comment ID is required");

        let err = request(r#"{"slug":"a","action":"delete-comment","payload":{"commentId":"42"}}"#)
            .into_parts()
            .unwrap_err();
        assert_eq!(validation_message(err), "Invalid comment ID");
    }

    #[test]
    fn test_missing_slug_or_action() {
        let err = request(r#"{"action":"view"}"#).into_parts().unwrap_err();
        assert_eq!(validation_message(err), "Slug and action are required");

        let err = request(r#"{"slug":"a"}"#).into_parts().unwrap_err();
        assert_eq!(validation_message(err), "Slug and action are required");
    }

    #[test]
    fn test_unknown_action() {
        let err = request(r#"{"slug":"a","action":"share"}"#)
            .into_parts()
            .unwrap_err();
        assert_eq!(validation_message(err), "Invalid action");
    }
}
