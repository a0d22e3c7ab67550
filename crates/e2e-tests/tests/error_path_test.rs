//! Fail-soft E2E tests.
//!
//! Transport faults, missing markup, missing corpora and degenerate corpora
//! must each be absorbed at their own granularity.

use pretty_assertions::assert_eq;

use e2e_tests::{MockNewsSite, TestHarness, FINANCE_BODY};
use news_cli::{build_category_report, run_report, ModelArgs, ReportStatus};
use news_crawler::{
    build_client, ArticleFetcher, CorpusBuilder, CorpusStore, ListingFetcher, Pacing,
};
use news_text::TextNormalizer;
use news_topics::{TopicLabeler, TopicsConfig};
use news_types::{Article, Section};

#[tokio::test]
async fn test_listing_failure_keeps_earlier_pages() {
    let harness = TestHarness::new();
    let site = MockNewsSite::start().await;
    site.listing_page(100, 1, "", &[("정치 기사", "/article/100/1")], Some("NEXT"))
        .await;
    site.failing_listing_page(100, 2, 503).await;
    site.article("/article/100/1", "정치 기사", FINANCE_BODY).await;

    let config = site.crawler_config();
    let client = build_client(&config).unwrap();
    let listing = ListingFetcher::new(client.clone(), &config).unwrap();
    let fetcher = ArticleFetcher::new(client).unwrap();
    let normalizer = TextNormalizer::default();
    let section = Section::from_name("정치").unwrap();

    let corpus = CorpusBuilder::new(&listing, &fetcher, &normalizer, &harness.store)
        .with_pacing(Pacing::none())
        .build_category(&section, 5)
        .await
        .unwrap();

    assert!(corpus.summary.stop.is_truncated());
    assert_eq!(corpus.articles.len(), 1);
    assert_eq!(harness.store.load(&section).unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_detail_pages_are_skipped() {
    let harness = TestHarness::new();
    let site = MockNewsSite::start().await;
    site.listing_page(
        102,
        1,
        "",
        &[
            ("정상", "/article/102/ok"),
            ("서버 오류", "/article/102/error"),
            ("구조 없음", "/article/102/plain"),
        ],
        None,
    )
    .await;
    site.article("/article/102/ok", "정상 기사", FINANCE_BODY).await;
    site.article_status("/article/102/error", 500).await;
    site.article_status("/article/102/plain", 200).await;

    let config = site.crawler_config();
    let client = build_client(&config).unwrap();
    let listing = ListingFetcher::new(client.clone(), &config).unwrap();
    let fetcher = ArticleFetcher::new(client).unwrap();
    let normalizer = TextNormalizer::default();
    let section = Section::from_name("사회").unwrap();

    let corpus = CorpusBuilder::new(&listing, &fetcher, &normalizer, &harness.store)
        .with_pacing(Pacing::none())
        .build_category(&section, 1)
        .await
        .unwrap();

    assert_eq!(corpus.summary.failed_fetches, 2);
    assert_eq!(corpus.articles.len(), 1);
    assert_eq!(corpus.articles[0].title, "정상 기사");
}

#[test]
fn test_missing_corpus_renders_zero_topics() {
    let harness = TestHarness::new();
    let section = Section::from_name("생활/문화").unwrap();
    let topics = TopicsConfig::default();
    let labeler = TopicLabeler::new(topics.labeling.clone());

    let report = build_category_report(&harness.store, &section, &topics, &labeler).unwrap();

    assert_eq!(report.status, ReportStatus::NotFound);
    assert!(report.topics.is_empty());
}

#[test]
fn test_one_failed_category_does_not_stop_others() {
    let harness = TestHarness::new();
    let politics = Section::from_name("정치").unwrap();
    let world = Section::from_name("세계").unwrap();

    // 정치 has only empty bodies, 세계 has nothing stored, 경제 is fine
    harness
        .store
        .save(
            &politics,
            &[Article {
                title: "빈 기사".to_string(),
                link: "https://news.example.com/empty".to_string(),
                raw_body: String::new(),
                normalized_body: String::new(),
            }],
        )
        .unwrap();
    let economy = Section::from_name("경제").unwrap();
    harness
        .store
        .save(&economy, &e2e_tests::two_theme_corpus(6))
        .unwrap();

    run_report(
        harness.settings(),
        &["정치".to_string(), "세계".to_string(), "경제".to_string()],
        &ModelArgs {
            num_topics: Some(2),
            passes: Some(20),
            seed: Some(1),
        },
    )
    .unwrap();

    let read = |section: &Section| -> serde_json::Value {
        let path = harness
            .data_dir
            .join("reports")
            .join(format!("{}.report.json", section.file_stem()));
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    };

    assert_eq!(read(&politics)["status"], "model_failed");
    assert_eq!(read(&world)["status"], "not_found");
    let economy_report = read(&economy);
    assert_eq!(economy_report["status"], "ready");
    assert_eq!(economy_report["topics"].as_array().unwrap().len(), 2);
}
