use super::*;
use crate::catalog::services::ValidationWarning;
use crate::shared::error::TevCatError;
use base64::Engine as _;
use serde_json::json;
use std::cell::RefCell;

struct MockPageFetcher {
    page: Option<String>,
}

impl PageFetcher for MockPageFetcher {
    fn fetch_page(&self) -> Result<String> {
        self.page.clone().ok_or_else(|| {
            TevCatError::Network {
                url: "http://example.invalid/".to_string(),
                details: "connection refused".to_string(),
            }
            .into()
        })
    }

    fn location(&self) -> String {
        "mock".to_string()
    }
}

#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
}

impl ProgressReporter for &RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn source(id: u32, name: &str, discoverer: &str, date: &str) -> serde_json::Value {
    json!({
        "id": id.to_string(),
        "canonical_name": name,
        "other_names": null,
        "catalog_name": format!("TeV J0000+00{}", id),
        "catalog_id": "1",
        "discoverer": discoverer,
        "observatory_name": "H.E.S.S.",
        "source_type": "18",
        "source_type_name": "UNID",
        "coord_ra": "18 25 49 ",
        "coord_dec": "-13 46 35",
        "variability": null,
        "owner": "1",
        "size_x": "0.1",
        "size_y": null,
        "discovery_date": date,
        "spec_idx": null,
        "flux": "0.05",
        "eth": "1000",
        "distance": null,
        "distance_mod": null,
        "ext": "1",
        "public": "1",
        "src_rank": "1",
        "image": null,
        "greens_cat": null,
        "notes": null,
        "private_notes": null
    })
}

fn page(sources: Vec<serde_json::Value>) -> String {
    let json = json!({
        "sources": sources,
        "catalogs": {"1": {"id": "1", "name": "Default Catalog", "description": "Established"}}
    })
    .to_string();
    let data = base64::engine::general_purpose::STANDARD.encode(json);
    format!(
        "<html>\n<div>TeVCat Version\n  TeVCat Version 3.400\n</div>\n<script>\nvar dat  = \"{}XYZ\";\nvar pytevcat = {};\n</script>\n</html>\n",
        data,
        data.len()
    )
}

#[test]
fn test_load_two_sources() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some(page(vec![
            source(1, "HESS J1825-137", "6", "2005/06"),
            source(2, "HESS J1826-130", "6", "198700"),
        ])),
    };
    let use_case = LoadCatalogUseCase::new(fetcher, &reporter);

    let response = use_case.execute().unwrap();
    let tevcat = &response.tevcat;
    assert_eq!(tevcat.version(), "3.400");
    assert_eq!(tevcat.len(), 2);
    assert_eq!(tevcat.sources()[0].canonical_name(), "HESS J1825-137");
    assert_eq!(tevcat.sources()[1].canonical_name(), "HESS J1826-130");
    for s in tevcat.sources() {
        assert_eq!(s.catalog().unwrap().name(), "Default Catalog");
    }
    assert!(response.warnings.is_empty());

    assert_eq!(*reporter.progress.borrow(), vec![(1, 2), (2, 2)]);
    let messages = reporter.messages.borrow();
    assert!(messages[0].contains("Fetching TeVCat page from mock"));
    assert!(messages.last().unwrap().contains("Loaded 2 sources in 1 catalogs"));
}

#[test]
fn test_warnings_are_reported() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some(page(vec![source(1, "HESS J1825-137", "1", "2021/01")])),
    };
    let response = LoadCatalogUseCase::new(fetcher, &reporter).execute().unwrap();

    assert_eq!(response.warnings.len(), 2);
    assert!(matches!(
        response.warnings[0],
        ValidationWarning::DiscovererMismatch { .. }
    ));
    assert!(matches!(
        response.warnings[1],
        ValidationWarning::ImplausibleDiscoveryDate { .. }
    ));

    let errors = reporter.errors.borrow();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.starts_with("⚠️  Warning: HESS J1825-137")));
}

#[test]
fn test_network_failure() {
    let reporter = RecordingReporter::default();
    let use_case = LoadCatalogUseCase::new(MockPageFetcher { page: None }, &reporter);
    let err = use_case.load_catalog().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TevCatError>(),
        Some(TevCatError::Network { .. })
    ));
    assert!(reporter.progress.borrow().is_empty());
}

#[test]
fn test_failed_fetch_clears_waiting_message() {
    let reporter = RecordingReporter::default();
    let use_case = LoadCatalogUseCase::new(MockPageFetcher { page: None }, &reporter);
    assert!(use_case.execute().is_err());

    assert_eq!(reporter.messages.borrow().len(), 1);
    assert!(reporter.messages.borrow()[0].starts_with("🌐 Fetching TeVCat page from mock"));
    assert_eq!(
        *reporter.errors.borrow(),
        vec!["❌ Failed to load TeVCat catalog from mock".to_string()]
    );
}

#[test]
fn test_missing_marker_is_reported() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some("<html>no catalog here</html>".to_string()),
    };
    assert!(LoadCatalogUseCase::new(fetcher, &reporter).execute().is_err());
    assert_eq!(reporter.errors.borrow().len(), 1);
    assert!(reporter.errors.borrow()[0].starts_with("❌ Failed to load"));
}

#[test]
fn test_malformed_payload_builds_nothing() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some("TeVCat Version 3.400\nvar dat  = \"@@@@\";\nvar pytevcat = 4;\n".to_string()),
    };
    let err = LoadCatalogUseCase::new(fetcher, &reporter)
        .execute()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TevCatError>(),
        Some(TevCatError::InvalidPayload { .. })
    ));
    assert!(reporter.progress.borrow().is_empty());
}

#[test]
fn test_unknown_discoverer_aborts_load() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some(page(vec![
            source(1, "HESS J1825-137", "6", "2005/06"),
            source(2, "Mystery", "4", "2005/06"),
        ])),
    };
    let err = LoadCatalogUseCase::new(fetcher, &reporter)
        .execute()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot find discoverer \"H.E.S.S.\" (4)"
    );
}

#[test]
fn test_missing_marker() {
    let reporter = RecordingReporter::default();
    let fetcher = MockPageFetcher {
        page: Some("<html>TeVCat Version 3.400</html>".to_string()),
    };
    let err = LoadCatalogUseCase::new(fetcher, &reporter)
        .execute()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TevCatError>(),
        Some(TevCatError::MissingMarker { .. })
    ));
}

#[test]
fn test_loading_twice_yields_equal_catalogs() {
    let reporter = RecordingReporter::default();
    let html = page(vec![source(1, "HESS J1825-137", "6", "2005/06")]);
    let first = LoadCatalogUseCase::new(MockPageFetcher { page: Some(html.clone()) }, &reporter)
        .execute()
        .unwrap();
    let second = LoadCatalogUseCase::new(MockPageFetcher { page: Some(html) }, &reporter)
        .execute()
        .unwrap();
    assert_eq!(first.tevcat, second.tevcat);
}
