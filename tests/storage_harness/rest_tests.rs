//! REST contract test macro for store backends.
//!
//! The `rest_contract_tests!` macro generates HTTP-level tests that validate
//! a store through full REST round-trips:
//! JSON → HTTP request → handler → store → HTTP response → JSON.

/// Generate the REST contract suite for a store backend.
///
/// `$store_factory` must produce an
/// `impl CompanyService + InvoiceService + 'static` with empty tables.
///
/// # Generated Tests
///
/// ## Companies
/// - lookup hit / miss, list projection, create round-trip
/// - duplicate code and duplicate name → 400
/// - missing body, malformed JSON, missing field → 400
/// - update, update of unknown code → 404, delete twice → deleted then 404
///
/// ## Invoices
/// - create defaults, unknown company → 400, non-numeric / non-positive amt → 400
/// - nested company on GET equals GET /companies/{comp_code}
/// - update with `{}` → 400 whether or not the id exists
/// - delete twice, company delete cascades, non-integer id → 404
///
/// ## Server
/// - health check, unknown route and unrouted method → JSON 404
/// - undecodable key segment → JSON 400
#[macro_export]
macro_rules! rest_contract_tests {
    ($store_factory:expr) => {
        mod rest_contract_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_test_server() -> TestServer {
                let store = $store_factory;
                storage_harness::make_server(store)
            }

            // ==============================================================
            // Companies — Get
            // ==============================================================

            #[tokio::test]
            async fn test_get_existing_company() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "apple", "Apple Computer", "Maker of OSX.").await;

                let response = server.get("/companies/apple").await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(
                    body,
                    json!({
                        "company": {
                            "code": "apple",
                            "name": "Apple Computer",
                            "description": "Maker of OSX."
                        }
                    })
                );
            }

            #[tokio::test]
            async fn test_get_unknown_company_is_404() {
                let server = make_test_server().await;

                let response = server.get("/companies/nope").await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                let message = storage_harness::assert_error_body(&body, StatusCode::NOT_FOUND);
                assert!(message.contains("nope"), "{}", message);
            }

            #[tokio::test]
            async fn test_create_then_get_round_trip() {
                let server = make_test_server().await;

                let created = storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                assert_eq!(created, json!({"code": "ibm", "name": "IBM", "description": "Big Blue"}));

                let body: Value = server.get("/companies/ibm").await.json();
                assert_eq!(body["company"], created);
            }

            // ==============================================================
            // Companies — List
            // ==============================================================

            #[tokio::test]
            async fn test_list_companies_projects_code_and_name() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "apple", "Apple Computer", "Maker of OSX.").await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server.get("/companies").await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                let companies = body["companies"].as_array().unwrap();
                assert_eq!(companies.len(), 2);
                for company in companies {
                    let keys: Vec<&String> = company.as_object().unwrap().keys().collect();
                    assert_eq!(keys.len(), 2, "unexpected fields: {:?}", keys);
                    assert!(company["code"].is_string());
                    assert!(company["name"].is_string());
                }
            }

            #[tokio::test]
            async fn test_list_companies_empty() {
                let server = make_test_server().await;

                let body: Value = server.get("/companies").await.json();
                assert_eq!(body, json!({"companies": []}));
            }

            // ==============================================================
            // Companies — Create failures
            // ==============================================================

            #[tokio::test]
            async fn test_duplicate_code_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .post("/companies")
                    .json(&json!({"code": "ibm", "name": "Other", "description": "x"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                storage_harness::assert_error_body(&response.json(), StatusCode::BAD_REQUEST);

                // The existing row is untouched
                let body: Value = server.get("/companies/ibm").await.json();
                assert_eq!(body["company"]["name"], "IBM");
            }

            #[tokio::test]
            async fn test_duplicate_name_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .post("/companies")
                    .json(&json!({"code": "ibm2", "name": "IBM", "description": "x"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_company_without_body_is_400() {
                let server = make_test_server().await;

                let response = server.post("/companies").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                storage_harness::assert_error_body(&response.json(), StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_company_with_malformed_json_is_400() {
                let server = make_test_server().await;

                let response = server.post("/companies").text("{\"code\": ").await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_company_missing_field_is_400() {
                let server = make_test_server().await;

                let response = server
                    .post("/companies")
                    .json(&json!({"code": "ibm", "name": "IBM"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let message = storage_harness::assert_error_body(&response.json(), StatusCode::BAD_REQUEST);
                assert!(message.contains("description"), "{}", message);

                server.get("/companies/ibm").await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_create_company_empty_code_is_400() {
                let server = make_test_server().await;

                let response = server
                    .post("/companies")
                    .json(&json!({"code": "", "name": "IBM", "description": "Big Blue"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            // ==============================================================
            // Companies — Update
            // ==============================================================

            #[tokio::test]
            async fn test_update_company() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .put("/companies/ibm")
                    .json(&json!({"name": "IBM Corp", "description": "Bigger Blue", "code": "ignored"}))
                    .await;
                response.assert_status(StatusCode::OK);

                let body: Value = response.json();
                assert_eq!(
                    body["company"],
                    json!({"code": "ibm", "name": "IBM Corp", "description": "Bigger Blue"})
                );
                server.get("/companies/ignored").await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_update_unknown_company_is_404() {
                let server = make_test_server().await;

                let response = server
                    .put("/companies/nope")
                    .json(&json!({"name": "Nope", "description": "none"}))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_update_company_invalid_body_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .put("/companies/ibm")
                    .json(&json!({"description": "no name"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            // ==============================================================
            // Companies — Delete
            // ==============================================================

            #[tokio::test]
            async fn test_delete_company_twice() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let first = server.delete("/companies/ibm").await;
                first.assert_status(StatusCode::OK);
                assert_eq!(first.json::<Value>(), json!({"status": "deleted"}));

                let second = server.delete("/companies/ibm").await;
                second.assert_status(StatusCode::NOT_FOUND);
                storage_harness::assert_error_body(&second.json(), StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_delete_company_cascades_invoices() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                let invoice = storage_harness::create_invoice(&server, "ibm", 100.0).await;
                let id = invoice["id"].as_i64().unwrap();

                server.delete("/companies/ibm").await.assert_status(StatusCode::OK);

                server
                    .get(&format!("/invoices/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Invoices — Create
            // ==============================================================

            #[tokio::test]
            async fn test_create_invoice_defaults() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let invoice = storage_harness::create_invoice(&server, "ibm", 250.5).await;
                assert!(invoice["id"].as_i64().is_some());
                assert_eq!(invoice["comp_code"], "ibm");
                assert_eq!(invoice["amt"], 250.5);
                assert_eq!(invoice["paid"], false);
                assert!(invoice["add_date"].is_string());
                assert!(invoice["paid_date"].is_null());
            }

            #[tokio::test]
            async fn test_create_invoice_for_unknown_company_is_400() {
                let server = make_test_server().await;

                let response = server
                    .post("/invoices")
                    .json(&json!({"comp_code": "ghost", "amt": 10}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                storage_harness::assert_error_body(&response.json(), StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_invoice_with_non_numeric_amt_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({"comp_code": "ibm", "amt": "lots"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_invoice_with_non_positive_amt_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({"comp_code": "ibm", "amt": 0}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_invoice_missing_amt_is_400() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({"comp_code": "ibm"}))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = server.get("/invoices").await.json();
                assert_eq!(body, json!({"invoices": []}));
            }

            // ==============================================================
            // Invoices — Get / List
            // ==============================================================

            #[tokio::test]
            async fn test_get_invoice_nests_owning_company() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "apple", "Apple Computer", "Maker of OSX.").await;
                let created = storage_harness::create_invoice(&server, "apple", 100.0).await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/invoices/{}", id)).await;
                response.assert_status(StatusCode::OK);

                let invoice = response.json::<Value>()["invoice"].clone();
                assert_eq!(invoice["id"], id);
                assert_eq!(invoice["amt"], created["amt"]);
                assert_eq!(invoice["paid"], created["paid"]);
                assert_eq!(invoice["add_date"], created["add_date"]);
                assert_eq!(invoice["paid_date"], created["paid_date"]);
                assert!(invoice.get("comp_code").is_none());

                let company: Value = server.get("/companies/apple").await.json();
                assert_eq!(invoice["company"], company["company"]);
            }

            #[tokio::test]
            async fn test_get_unknown_invoice_is_404() {
                let server = make_test_server().await;

                server.get("/invoices/999").await.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_get_invoice_with_non_integer_id_is_404() {
                let server = make_test_server().await;

                let response = server.get("/invoices/abc").await;
                response.assert_status(StatusCode::NOT_FOUND);
                storage_harness::assert_error_body(&response.json(), StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_list_invoices_projects_id_and_comp_code_in_id_order() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "apple", "Apple Computer", "Maker of OSX.").await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                storage_harness::create_invoice(&server, "ibm", 10.0).await;
                storage_harness::create_invoice(&server, "apple", 20.0).await;
                storage_harness::create_invoice(&server, "ibm", 30.0).await;

                let body: Value = server.get("/invoices").await.json();
                let invoices = body["invoices"].as_array().unwrap();
                assert_eq!(invoices.len(), 3);

                let ids: Vec<i64> = invoices.iter().map(|i| i["id"].as_i64().unwrap()).collect();
                let mut sorted = ids.clone();
                sorted.sort();
                assert_eq!(ids, sorted);

                for invoice in invoices {
                    assert_eq!(invoice.as_object().unwrap().len(), 2);
                    assert!(invoice["comp_code"].is_string());
                }
            }

            // ==============================================================
            // Invoices — Update
            // ==============================================================

            #[tokio::test]
            async fn test_update_invoice_amount() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                let created = storage_harness::create_invoice(&server, "ibm", 100.0).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/invoices/{}", id))
                    .json(&json!({"amt": 300}))
                    .await;
                response.assert_status(StatusCode::OK);

                let invoice = response.json::<Value>()["invoice"].clone();
                assert_eq!(invoice["id"], id);
                assert_eq!(invoice["comp_code"], "ibm");
                assert_eq!(invoice["amt"], 300.0);
            }

            #[tokio::test]
            async fn test_update_invoice_without_amt_is_400_for_any_id() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                let created = storage_harness::create_invoice(&server, "ibm", 100.0).await;
                let id = created["id"].as_i64().unwrap();

                for path in [format!("/invoices/{}", id), "/invoices/999".to_string()] {
                    let response = server.put(&path).json(&json!({})).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                }
            }

            #[tokio::test]
            async fn test_update_unknown_invoice_is_404() {
                let server = make_test_server().await;

                let response = server
                    .put("/invoices/999")
                    .json(&json!({"amt": 5}))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Invoices — Delete
            // ==============================================================

            #[tokio::test]
            async fn test_delete_invoice_twice() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;
                let created = storage_harness::create_invoice(&server, "ibm", 100.0).await;
                let path = format!("/invoices/{}", created["id"].as_i64().unwrap());

                let first = server.delete(&path).await;
                first.assert_status(StatusCode::OK);
                assert_eq!(first.json::<Value>(), json!({"status": "deleted"}));

                server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Server
            // ==============================================================

            #[tokio::test]
            async fn test_health_check() {
                let server = make_test_server().await;

                let response = server.get("/health").await;
                response.assert_status(StatusCode::OK);
                assert_eq!(response.json::<Value>()["status"], "ok");
            }

            #[tokio::test]
            async fn test_unknown_route_is_json_404() {
                let server = make_test_server().await;

                let response = server.get("/payments").await;
                response.assert_status(StatusCode::NOT_FOUND);
                let message = storage_harness::assert_error_body(&response.json(), StatusCode::NOT_FOUND);
                assert_eq!(message, "Not Found");
            }

            #[tokio::test]
            async fn test_unrouted_method_is_json_404() {
                let server = make_test_server().await;
                storage_harness::create_company(&server, "ibm", "IBM", "Big Blue").await;

                for response in [
                    server.patch("/companies/ibm").await,
                    server.delete("/companies").await,
                    server.put("/invoices").await,
                ] {
                    response.assert_status(StatusCode::NOT_FOUND);
                    storage_harness::assert_error_body(&response.json(), StatusCode::NOT_FOUND);
                }

                // The company is untouched
                server.get("/companies/ibm").await.assert_status(StatusCode::OK);
            }

            #[tokio::test]
            async fn test_undecodable_key_segment_is_json_400() {
                let server = make_test_server().await;

                for path in ["/companies/%FF", "/invoices/%FF"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::BAD_REQUEST);
                    storage_harness::assert_error_body(&response.json(), StatusCode::BAD_REQUEST);
                }
            }
        }
    };
}
