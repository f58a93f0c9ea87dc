//! Service-level tests against a migrated in-memory SQLite database.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pkucat_common::{AppError, FeedConfig};
use pkucat_core::{
    CommentService, CreateCommentInput, CreatePostInput, CreateUserInput, FavorService,
    MediaInput, PostService, UserService,
};
use pkucat_db::entities::{Comment, Favor, Photo, TextKey, post::MediaKind};
use pkucat_db::repositories::{
    CommentRepository, FavorRepository, PhotoRepository, PostRepository, TextKeyRepository,
    UserRepository,
};
use pkucat_db::test_utils::TestDatabase;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

struct Services {
    users: UserService,
    posts: PostService,
    comments: CommentService,
    favors: FavorService,
}

fn services(db: Arc<DatabaseConnection>) -> Services {
    let feed = FeedConfig::default();
    let post_repo = PostRepository::new(db.clone());
    let user_repo = UserRepository::new(db.clone());
    let comment_repo = CommentRepository::new(db.clone());
    let favor_repo = FavorRepository::new(db.clone());

    Services {
        users: UserService::new(user_repo.clone()),
        posts: PostService::new(
            post_repo.clone(),
            user_repo.clone(),
            PhotoRepository::new(db.clone()),
            TextKeyRepository::new(db),
            comment_repo.clone(),
            favor_repo.clone(),
        )
        .with_feed_config(feed.clone()),
        comments: CommentService::new(comment_repo, post_repo.clone(), user_repo.clone())
            .with_feed_config(feed.clone()),
        favors: FavorService::new(favor_repo, post_repo, user_repo).with_feed_config(feed),
    }
}

async fn setup() -> (TestDatabase, Services) {
    let db = TestDatabase::in_memory().await.unwrap();
    let services = services(db.shared());
    (db, services)
}

fn user_input(username: &str) -> CreateUserInput {
    CreateUserInput {
        username: username.to_string(),
    }
}

fn photo_post(text: &str, photos: &[&str]) -> CreatePostInput {
    CreatePostInput {
        text: Some(text.to_string()),
        media: MediaInput::Images {
            locations: photos.iter().map(ToString::to_string).collect(),
        },
    }
}

fn comment(text: &str) -> CreateCommentInput {
    CreateCommentInput {
        text: text.to_string(),
    }
}

#[tokio::test]
async fn test_create_post_with_photos_and_keywords() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();

    let post = s
        .posts
        .create(
            alice.id,
            photo_post("Spring at the Lake, spring again", &["media/1.jpg", "media/2.jpg"]),
        )
        .await
        .unwrap();

    assert_eq!(post.media_kind(), MediaKind::Image);
    assert_eq!(post.is_video, Some(false));
    assert!(post.video.is_none());

    let detail = s.posts.get_detail(post.id).await.unwrap();
    let photos: Vec<&str> = detail.photos.iter().map(|p| p.photo.as_str()).collect();
    let keys: Vec<&str> = detail.keywords.iter().map(|k| k.key.as_str()).collect();

    assert_eq!(photos, vec!["media/1.jpg", "media/2.jpg"]);
    assert_eq!(keys, vec!["spring", "lake", "again"]);
    assert_eq!(detail.comments_count, 0);
    assert_eq!(detail.favors_count, 0);
}

#[tokio::test]
async fn test_create_video_post() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();

    let post = s
        .posts
        .create(
            alice.id,
            CreatePostInput {
                text: None,
                media: MediaInput::Video {
                    location: "media/clip.mp4".to_string(),
                },
            },
        )
        .await
        .unwrap();

    assert_eq!(post.is_video, Some(true));
    assert_eq!(post.video.as_deref(), Some("media/clip.mp4"));
    assert!(post.text.is_none());

    let detail = s.posts.get_detail(post.id).await.unwrap();
    assert!(detail.photos.is_empty());
    assert!(detail.keywords.is_empty());
}

#[tokio::test]
async fn test_create_post_for_missing_user() {
    let (_db, s) = setup().await;

    let result = s.posts.create(42, photo_post("hello", &["a.jpg"])).await;
    assert!(matches!(result, Err(AppError::UserNotFound(_))));
}

#[tokio::test]
async fn test_post_text_limit() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();

    let at_limit = CreatePostInput {
        text: Some("x".repeat(2000)),
        media: MediaInput::None,
    };
    let over_limit = CreatePostInput {
        text: Some("x".repeat(2001)),
        media: MediaInput::None,
    };

    s.posts.create(alice.id, at_limit).await.unwrap();
    let result = s.posts.create(alice.id, over_limit).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_comment_text_limit() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let post = s
        .posts
        .create(alice.id, photo_post("hello", &["a.jpg"]))
        .await
        .unwrap();

    s.comments
        .create(alice.id, post.id, comment(&"c".repeat(500)))
        .await
        .unwrap();
    let result = s
        .comments
        .create(alice.id, post.id, comment(&"c".repeat(501)))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    assert_eq!(s.comments.count(post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_favor_once_per_user() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let bob = s.users.create(user_input("bob")).await.unwrap();
    let post = s
        .posts
        .create(alice.id, photo_post("hello", &["a.jpg"]))
        .await
        .unwrap();

    s.favors.favor(bob.id, post.id).await.unwrap();
    let again = s.favors.favor(bob.id, post.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    assert!(s.favors.is_favored(bob.id, post.id).await.unwrap());
    assert_eq!(s.favors.count(post.id).await.unwrap(), 1);

    s.favors.unfavor(bob.id, post.id).await.unwrap();
    assert!(!s.favors.is_favored(bob.id, post.id).await.unwrap());
    assert!(matches!(
        s.favors.unfavor(bob.id, post.id).await,
        Err(AppError::NotFound(_))
    ));

    // Liking again after unliking is allowed.
    s.favors.favor(bob.id, post.id).await.unwrap();
    assert_eq!(s.favors.list_by_user(bob.id, None, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_favor_by_missing_user() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let post = s
        .posts
        .create(alice.id, photo_post("hello", &["a.jpg"]))
        .await
        .unwrap();

    let result = s.favors.favor(999, post.id).await;
    assert!(matches!(result, Err(AppError::UserNotFound(id)) if id == "999"));
    assert_eq!(s.favors.count(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_post_cascades_through_service() {
    let (db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let bob = s.users.create(user_input("bob")).await.unwrap();
    let post = s
        .posts
        .create(alice.id, photo_post("lake view", &["a.jpg", "b.jpg"]))
        .await
        .unwrap();
    s.comments
        .create(bob.id, post.id, comment("wow"))
        .await
        .unwrap();
    s.favors.favor(bob.id, post.id).await.unwrap();

    let forbidden = s.posts.delete(bob.id, post.id).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));

    s.posts.delete(alice.id, post.id).await.unwrap();

    let conn = db.connection();
    assert!(matches!(
        s.posts.get(post.id).await,
        Err(AppError::PostNotFound(_))
    ));
    assert_eq!(Comment::find().count(conn).await.unwrap(), 0);
    assert_eq!(Photo::find().count(conn).await.unwrap(), 0);
    assert_eq!(Favor::find().count(conn).await.unwrap(), 0);
    assert_eq!(TextKey::find().count(conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_user_cascades_through_service() {
    let (db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let bob = s.users.create(user_input("bob")).await.unwrap();
    let alice_post = s
        .posts
        .create(alice.id, photo_post("mine", &["a.jpg"]))
        .await
        .unwrap();
    let bob_post = s
        .posts
        .create(bob.id, photo_post("bob's", &["b.jpg"]))
        .await
        .unwrap();
    s.comments
        .create(alice.id, bob_post.id, comment("hi bob"))
        .await
        .unwrap();
    s.favors.favor(alice.id, bob_post.id).await.unwrap();
    s.favors.favor(bob.id, alice_post.id).await.unwrap();

    s.users.delete(alice.id).await.unwrap();

    assert!(matches!(
        s.posts.get(alice_post.id).await,
        Err(AppError::PostNotFound(_))
    ));
    let detail = s.posts.get_detail(bob_post.id).await.unwrap();
    assert_eq!(detail.comments_count, 0);
    assert_eq!(detail.favors_count, 0);
    assert_eq!(detail.photos.len(), 1);
    assert_eq!(Favor::find().count(db.connection()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_search_and_listing() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let bob = s.users.create(user_input("bob")).await.unwrap();

    let first = s
        .posts
        .create(alice.id, photo_post("未名湖 spring", &["a.jpg"]))
        .await
        .unwrap();
    let second = s
        .posts
        .create(bob.id, photo_post("library spring", &["b.jpg"]))
        .await
        .unwrap();
    let third = s
        .posts
        .create(alice.id, photo_post("未名湖 winter", &["c.jpg"]))
        .await
        .unwrap();

    let ids = |posts: Vec<pkucat_db::entities::post::Model>| -> Vec<i32> {
        posts.into_iter().map(|p| p.id).collect()
    };

    assert_eq!(
        ids(s.posts.search_by_keyword("Spring", None, None).await.unwrap()),
        vec![second.id, first.id]
    );
    assert_eq!(
        ids(s.posts.search_by_keyword("未名湖", None, None).await.unwrap()),
        vec![third.id, first.id]
    );
    assert_eq!(
        ids(s.posts.search_by_keyword("未名湖 winter", None, None).await.unwrap()),
        vec![third.id]
    );

    assert_eq!(
        ids(s.posts.list_by_publisher(alice.id, None, None).await.unwrap()),
        vec![third.id, first.id]
    );
    assert_eq!(
        ids(s.posts.list_recent(Some(2), None).await.unwrap()),
        vec![third.id, second.id]
    );
    assert_eq!(
        ids(s.posts.list_recent(None, Some(second.id)).await.unwrap()),
        vec![first.id]
    );
    assert_eq!(s.posts.count_by_publisher(alice.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_comment_listing_and_deletion() {
    let (_db, s) = setup().await;
    let alice = s.users.create(user_input("alice")).await.unwrap();
    let bob = s.users.create(user_input("bob")).await.unwrap();
    let carol = s.users.create(user_input("carol")).await.unwrap();
    let post = s
        .posts
        .create(alice.id, photo_post("hello", &["a.jpg"]))
        .await
        .unwrap();

    let c1 = s.comments.create(bob.id, post.id, comment("first")).await.unwrap();
    let c2 = s.comments.create(carol.id, post.id, comment("second")).await.unwrap();

    let listed = s.comments.list(post.id, None, None).await.unwrap();
    assert_eq!(listed.iter().map(|c| c.id).collect::<Vec<_>>(), vec![c1.id, c2.id]);
    let after = s.comments.list(post.id, None, Some(c1.id)).await.unwrap();
    assert_eq!(after.iter().map(|c| c.id).collect::<Vec<_>>(), vec![c2.id]);
    let first_page = s.comments.list(post.id, Some(1), None).await.unwrap();
    assert_eq!(first_page.iter().map(|c| c.id).collect::<Vec<_>>(), vec![c1.id]);

    assert!(matches!(
        s.comments.delete(carol.id, c1.id).await,
        Err(AppError::Forbidden(_))
    ));
    s.comments.delete(alice.id, c1.id).await.unwrap();
    s.comments.delete(carol.id, c2.id).await.unwrap();
    assert_eq!(s.comments.count(post.id).await.unwrap(), 0);
}
