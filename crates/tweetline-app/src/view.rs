//! View model.
//!
//! Pure functions from [`App`] state to display-ready values. Every render
//! rebuilds the whole list from the current snapshot; nothing is diffed.

use std::fmt;

use tweetline_proto::{Filter, Post, PostId, encode_component};

use crate::{App, TimelineStatus};

/// Avatar background for post authors.
pub const POST_AVATAR_BACKGROUND: &str = "1da1f2";

/// Avatar background for the user list.
pub const USER_AVATAR_BACKGROUND: &str = "random";

/// Shown when the first timeline load failed.
pub const UNAVAILABLE: &str = "Error loading tweets";

/// Generated avatar image URL for `name`.
pub fn avatar_url(name: &str, background: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={background}&color=fff",
        encode_component(name)
    )
}

/// An interactive control bound to a post or author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Like the post.
    Like(PostId),
    /// Edit the post.
    Edit(PostId),
    /// Delete the post.
    Delete(PostId),
    /// Filter the timeline to this author.
    SelectAuthor(String),
}

impl Control {
    /// Button label.
    pub fn label(&self) -> &str {
        match self {
            Self::Like(_) => "Like",
            Self::Edit(_) => "Edit",
            Self::Delete(_) => "Delete",
            Self::SelectAuthor(name) => name,
        }
    }

    /// Command that triggers this control from the input line.
    pub fn command_hint(&self) -> String {
        match self {
            Self::Like(id) => format!("/like {id}"),
            Self::Edit(id) => format!("/edit {id} <text>"),
            Self::Delete(id) => format!("/delete {id}"),
            Self::SelectAuthor(name) => format!("/user {name}"),
        }
    }
}

/// One rendered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    /// Post id, shown so commands can reference it.
    pub id: PostId,
    /// Author name.
    pub author: String,
    /// Post text.
    pub content: String,
    /// Like counter label.
    pub likes: String,
    /// Author avatar.
    pub avatar_url: String,
    /// Like, edit and delete, in that order.
    pub controls: [Control; 3],
}

/// One entry of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    /// Author name.
    pub name: String,
    /// Author avatar.
    pub avatar_url: String,
    /// Whether the timeline is filtered to this author.
    pub selected: bool,
    /// Filter to this author.
    pub control: Control,
}

/// The timeline area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineView {
    /// Waiting for the first response.
    Loading,
    /// Posts, newest first.
    Posts(Vec<PostView>),
    /// Filtered author has no posts.
    NoResults {
        /// Author that was searched for.
        author: String,
    },
    /// Nobody has posted yet.
    Empty,
    /// Loading failed with nothing to show.
    Unavailable,
}

impl fmt::Display for TimelineView {
    /// Placeholder text for non-list states; post count for lists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading..."),
            Self::Posts(posts) => write!(f, "{} tweets", posts.len()),
            Self::NoResults { author } => write!(f, "No tweets found for user: {author}"),
            Self::Empty => f.write_str("No tweets yet"),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Render one post.
pub fn post(post: &Post) -> PostView {
    PostView {
        id: post.id,
        author: post.user.clone(),
        content: post.content.clone(),
        likes: format!("♥ {}", post.likes),
        avatar_url: avatar_url(&post.user, POST_AVATAR_BACKGROUND),
        controls: [Control::Like(post.id), Control::Edit(post.id), Control::Delete(post.id)],
    }
}

/// Render the timeline area.
pub fn timeline(app: &App) -> TimelineView {
    match app.timeline_status() {
        TimelineStatus::Loading => TimelineView::Loading,
        TimelineStatus::Unavailable => TimelineView::Unavailable,
        TimelineStatus::NotFound { author } => TimelineView::NoResults { author: author.clone() },
        TimelineStatus::Ready if app.posts().is_empty() => match app.filter() {
            Filter::All => TimelineView::Empty,
            Filter::Author(author) => TimelineView::NoResults { author: author.clone() },
        },
        TimelineStatus::Ready => TimelineView::Posts(app.posts().iter().map(post).collect()),
    }
}

/// Render the user list.
pub fn users(app: &App) -> Vec<UserView> {
    let selected = app.filter().author();
    app.users()
        .iter()
        .map(|name| UserView {
            name: name.clone(),
            avatar_url: avatar_url(name, USER_AVATAR_BACKGROUND),
            selected: selected == Some(name.as_str()),
            control: Control::SelectAuthor(name.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppAction, AppEvent};

    fn loaded(posts: Vec<Post>, filter: &str) -> App {
        let mut app = App::default();
        let _ = app.start_timeline();
        let request = app
            .set_filter(filter)
            .into_iter()
            .find_map(|a| match a {
                AppAction::FetchTimeline { request, .. } => Some(request),
                _ => None,
            })
            .unwrap();
        let _ = app.handle(AppEvent::TimelineLoaded { request, posts });
        app
    }

    #[test]
    fn avatar_name_is_component_encoded() {
        assert_eq!(
            avatar_url("Ana María", POST_AVATAR_BACKGROUND),
            "https://ui-avatars.com/api/?name=Ana%20Mar%C3%ADa&background=1da1f2&color=fff"
        );
    }

    #[test]
    fn post_controls_bind_to_post_id() {
        let view = post(&Post::new(9, "ana", "hi"));

        assert_eq!(view.likes, "♥ 0");
        assert_eq!(view.controls.iter().map(Control::command_hint).collect::<Vec<_>>(), [
            "/like 9",
            "/edit 9 <text>",
            "/delete 9"
        ]);
    }

    #[test]
    fn empty_filtered_timeline_shows_no_results() {
        let app = loaded(vec![], "ghost");
        insta::assert_snapshot!(timeline(&app), @"No tweets found for user: ghost");
    }

    #[test]
    fn empty_unfiltered_timeline_is_empty() {
        let app = loaded(vec![], "");
        assert_eq!(timeline(&app), TimelineView::Empty);
    }

    #[test]
    fn user_list_marks_filtered_author() {
        let mut app = loaded(vec![Post::new(1, "bo", "x")], "bo");
        let _ = app.handle(AppEvent::UsersLoaded { users: vec!["ana".into(), "bo".into()] });

        let views = users(&app);
        assert!(!views[0].selected);
        assert!(views[1].selected);
        assert!(views[1].avatar_url.ends_with("background=random&color=fff"));
    }
}
