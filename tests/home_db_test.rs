mod common;

use learning_backend::services::ad_service::AdService;
use learning_backend::services::content_service::ContentService;
use learning_backend::services::home_service::HomeService;
use sqlx::PgPool;

use common::{database_pool, unique_suffix};

async fn insert_language(pool: &PgPool) -> i64 {
    sqlx::query_scalar("INSERT INTO languages (name, iso) VALUES ('Test', 'tt') RETURNING id")
        .fetch_one(pool)
        .await
        .expect("seed language")
}

async fn insert_user(pool: &PgPool, block: i16) -> i64 {
    let suffix = unique_suffix();
    sqlx::query_scalar(
        r#"
        INSERT INTO users (user_name, email, first_name, block)
        VALUES ($1, $2, 'Ada', $3)
        RETURNING id
        "#,
    )
    .bind(format!("learner_{}_{}", block, suffix))
    .bind(format!("learner_{}_{}@example.com", block, suffix))
    .bind(block)
    .fetch_one(pool)
    .await
    .expect("seed user")
}

async fn insert_review(pool: &PgPool, user_id: i64, status: i16) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO review (user_id, status, review) VALUES ($1, $2, 'Great') RETURNING id",
    )
    .bind(user_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("seed review")
}

#[tokio::test]
async fn testimonials_skip_blocked_and_unpublished() {
    let Some(pool) = database_pool().await else {
        return;
    };
    let active_user = insert_user(&pool, 0).await;
    let blocked_user = insert_user(&pool, 1).await;
    let older = insert_review(&pool, active_user, 1).await;
    let newer = insert_review(&pool, active_user, 1).await;
    let from_blocked = insert_review(&pool, blocked_user, 1).await;
    let unpublished = insert_review(&pool, active_user, 0).await;

    let svc = HomeService::new(pool.clone());
    let reviews = svc.testimonials(50).await.unwrap();
    let ids: Vec<i64> = reviews.iter().map(|r| r.id).collect();
    assert!(!ids.contains(&from_blocked));
    assert!(!ids.contains(&unpublished));
    let pos_newer = ids.iter().position(|id| *id == newer).expect("newer listed");
    let pos_older = ids.iter().position(|id| *id == older).expect("older listed");
    assert!(pos_newer < pos_older);
    assert_eq!(reviews[pos_newer].first_name.as_deref(), Some("Ada"));

    assert_eq!(svc.testimonials(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn news_slides_and_memberships_are_localized() {
    let Some(pool) = database_pool().await else {
        return;
    };
    let lang = insert_language(&pool).await;

    let old_news: i64 = sqlx::query_scalar("INSERT INTO news (created_date) VALUES (NOW()) RETURNING id")
        .fetch_one(&pool)
        .await
        .unwrap();
    let new_news: i64 = sqlx::query_scalar(
        "INSERT INTO news (created_date) VALUES (NOW() + INTERVAL '1 minute') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let hidden_news: i64 = sqlx::query_scalar(
        "INSERT INTO news (status, created_date) VALUES (0, NOW() + INTERVAL '2 minutes') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO news_label (news_id, language_id, title) VALUES ($1, $2, 'Fresh')")
        .bind(new_news)
        .bind(lang)
        .execute(&pool)
        .await
        .unwrap();

    let svc = HomeService::new(pool.clone());
    let news = svc.latest_news(lang, 1000).await.unwrap();
    let pos_new = news.iter().position(|n| n.id == new_news).expect("new news listed");
    let pos_old = news.iter().position(|n| n.id == old_news).expect("old news listed");
    assert!(pos_new < pos_old);
    assert_eq!(news[pos_new].title.as_deref(), Some("Fresh"));
    assert_eq!(news[pos_old].title, None);
    assert!(news.iter().all(|n| n.id != hidden_news));

    let slide: i64 = sqlx::query_scalar("INSERT INTO slideshow (image) VALUES ('hero.jpg') RETURNING id")
        .fetch_one(&pool)
        .await
        .unwrap();
    let hidden_slide: i64 =
        sqlx::query_scalar("INSERT INTO slideshow (status) VALUES (0) RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    sqlx::query("INSERT INTO slideshow_label (slideshow_id, language_id, value) VALUES ($1, $2, 'Learn')")
        .bind(slide)
        .bind(lang)
        .execute(&pool)
        .await
        .unwrap();
    let slides = svc.slideshow(lang).await.unwrap();
    let ours = slides.iter().find(|s| s.id == slide).expect("slide listed");
    assert_eq!(ours.value.as_deref(), Some("Learn"));
    assert!(slides.iter().all(|s| s.id != hidden_slide));

    let plan: i64 = sqlx::query_scalar(
        "INSERT INTO membership (price, vip) VALUES (19.90, TRUE) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let plans = svc.memberships(lang).await.unwrap();
    let ours = plans.iter().find(|m| m.id == plan).expect("plan listed");
    assert_eq!(ours.price.to_string(), "19.90");
    assert!(ours.vip);
    assert_eq!(ours.title, None);
}

#[tokio::test]
async fn gallery_and_page_images() {
    let Some(pool) = database_pool().await else {
        return;
    };
    let suffix = unique_suffix();
    let hero = format!("hero_{}", suffix);
    let missing = format!("missing_{}", suffix);
    sqlx::query("INSERT INTO page_images (key, image) VALUES ($1, 'hero.png')")
        .bind(&hero)
        .execute(&pool)
        .await
        .unwrap();

    let svc = HomeService::new(pool.clone());
    let images = svc.page_images(&[hero.clone(), missing.clone()]).await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images.get(&hero), Some(&Some("hero.png".to_string())));
    assert!(!images.contains_key(&missing));

    let (newest, newest_date): (i64, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO gallery (image, created_date) VALUES ('g.jpg', NOW() + INTERVAL '1 hour') RETURNING id, created_date",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO gallery (image, status, created_date) VALUES ('off.jpg', 0, NOW() + INTERVAL '2 hours')")
        .execute(&pool)
        .await
        .unwrap();
    let gallery = svc.gallery(1).await.unwrap();
    assert_eq!(gallery.len(), 1);
    assert!(gallery[0].id == newest || gallery[0].created_date >= newest_date);
    assert_ne!(gallery[0].image, "off.jpg");
}

#[tokio::test]
async fn static_pages_and_contact() {
    let Some(pool) = database_pool().await else {
        return;
    };
    let lang = insert_language(&pool).await;
    let page_key = format!("page_{}", unique_suffix());
    let mut ids = Vec::new();
    for sort_order in [2, 1] {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO static_pages (page_key, sort_order) VALUES ($1, $2) RETURNING id",
        )
        .bind(&page_key)
        .bind(sort_order)
        .fetch_one(&pool)
        .await
        .unwrap();
        ids.push(id);
    }
    sqlx::query("INSERT INTO static_pages (page_key, status) VALUES ($1, 0)")
        .bind(&page_key)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO static_pages_label (static_pages_id, language_id, title) VALUES ($1, $2, 'About')")
        .bind(ids[1])
        .bind(lang)
        .execute(&pool)
        .await
        .unwrap();

    let svc = ContentService::new(pool.clone());
    let pages = svc.pages(&page_key, lang).await.unwrap();
    assert_eq!(pages.iter().map(|p| p.id).collect::<Vec<_>>(), vec![ids[1], ids[0]]);
    let first = svc.first_page(&page_key, lang).await.unwrap().expect("first block");
    assert_eq!(first.id, ids[1]);
    assert_eq!(first.title.as_deref(), Some("About"));
    assert!(svc.first_page("no_such_page", lang).await.unwrap().is_none());

    sqlx::query("INSERT INTO contact_info (phone) VALUES ('+1 555 0100')")
        .execute(&pool)
        .await
        .unwrap();
    assert!(svc.contact(lang).await.unwrap().is_some());
}

#[tokio::test]
async fn test_ads_prefer_the_newest_specific_one() {
    let Some(pool) = database_pool().await else {
        return;
    };
    // Negative ids never collide with BIGSERIAL test ids.
    let test_id = -(unique_suffix().parse::<i64>().unwrap() % 1_000_000_000) - 1;
    for (minutes, status) in [(0, 1), (1, 1), (2, 0)] {
        sqlx::query(
            r#"
            INSERT INTO advertisements (test_id, status, content, created_date)
            VALUES ($1, $2, $3, NOW() + make_interval(mins => $4))
            "#,
        )
        .bind(test_id)
        .bind(status as i16)
        .bind(format!("ad {}", minutes))
        .bind(minutes)
        .execute(&pool)
        .await
        .unwrap();
    }
    sqlx::query("INSERT INTO advertisements (test_id, content) VALUES (NULL, 'general')")
        .execute(&pool)
        .await
        .unwrap();

    let svc = AdService::new(pool.clone());
    let ad = svc.ad_for_test(test_id).await.unwrap().expect("specific ad");
    assert_eq!(ad.test_id, Some(test_id));
    assert_eq!(ad.content.as_deref(), Some("ad 1"));

    let fallback = svc.ad_for_test(test_id - 1).await.unwrap().expect("general ad");
    assert!(matches!(fallback.test_id, None | Some(0)));
}
