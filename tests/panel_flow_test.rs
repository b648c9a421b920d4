//! 面板动作的端到端测试
//!
//! 用 wiremock 模拟商店后端，逐个验证面板动作的
//! 请求载荷、提示文案、列表渲染和可见性切换

use serde_json::json;
use shop_admin_panel::orchestrator::AdminPanel;
use shop_admin_panel::{Config, FormField, ProductFilter, Role};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 每个测试用独立的令牌文件，互不干扰
fn temp_token_file(tag: &str) -> String {
    std::env::temp_dir()
        .join(format!("panel_flow_{}_{}.txt", tag, std::process::id()))
        .to_string_lossy()
        .into_owned()
}

/// 构建指向 mock 后端的面板
///
/// # 参数
/// - `with_token`: 预置的访问令牌，模拟已登录状态
fn mock_panel(server: &MockServer, tag: &str, with_token: Option<&str>) -> AdminPanel {
    let token_file = temp_token_file(tag);

    if let Some(token) = with_token {
        std::fs::write(&token_file, format!("access_token={}\n", token)).unwrap();
    } else {
        let _ = std::fs::remove_file(&token_file);
    }

    let config = Config {
        api_base_url: format!("{}/api", server.uri()),
        token_file,
        ..Default::default()
    };

    AdminPanel::initialize(config).unwrap()
}

/// 往表单里填满一组
async fn fill_group(panel: &AdminPanel, id: u64, name: &str) {
    panel.set_group_field(id, FormField::Name, name).await.unwrap();
    panel
        .set_group_field(id, FormField::Description, "desc")
        .await
        .unwrap();
    panel.set_group_field(id, FormField::Price, "9.99").await.unwrap();
    panel
        .set_group_field(id, FormField::StockQuantity, "5")
        .await
        .unwrap();
    panel.set_group_field(id, FormField::Shop, "1").await.unwrap();
}

#[tokio::test]
async fn test_register_success_renders_success_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register/"))
        .and(body_json(json!({
            "name": "alice",
            "email": "alice@example.com",
            "role": "shopkeeper",
            "password": "secret",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "name": "alice",
            "email": "alice@example.com",
            "role": "shopkeeper",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "register_ok", None);
    panel
        .register("alice", "alice@example.com", Role::Shopkeeper, "secret")
        .await;

    assert_eq!(panel.view().await.sign_up_response, "Sign Up successful!");
}

#[tokio::test]
async fn test_register_error_renders_server_message_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/register/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "email already exists" })),
        )
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "register_err", None);
    panel
        .register("alice", "alice@example.com", Role::Customer, "secret")
        .await;

    assert_eq!(
        panel.view().await.sign_up_response,
        "Error: email already exists"
    );
}

#[tokio::test]
async fn test_register_error_without_error_field_uses_fallback() {
    let server = MockServer::start().await;

    // 字段校验类错误没有 error 字段
    Mock::given(method("POST"))
        .and(path("/api/register/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "email": ["This field is required."] })),
        )
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "register_fallback", None);
    panel.register("alice", "", Role::Customer, "secret").await;

    assert_eq!(
        panel.view().await.sign_up_response,
        "Error: Failed to sign up"
    );
}

#[tokio::test]
async fn test_login_success_persists_token_and_toggles_visibility() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "password": "secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "tok-abc",
            "refresh": "tok-refresh",
        })))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "login_ok", None);

    let before = panel.view().await;
    assert!(before.login_form_visible);
    assert!(!before.browse_controls_visible);

    panel.login("alice@example.com", "secret").await;

    let view = panel.view().await;
    assert_eq!(view.login_response, "Login successful!");
    assert!(!view.login_form_visible);
    assert!(view.browse_controls_visible);

    // 令牌按固定键名落盘
    let stored = std::fs::read_to_string(temp_token_file("login_ok")).unwrap();
    assert_eq!(stored.trim(), "access_token=tok-abc");

    let _ = std::fs::remove_file(temp_token_file("login_ok"));
}

#[tokio::test]
async fn test_login_failure_leaves_visibility_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "login_err", None);
    panel.login("alice@example.com", "wrong").await;

    let view = panel.view().await;
    assert_eq!(
        view.login_response,
        "Error: No active account found with the given credentials"
    );
    assert!(view.login_form_visible);
    assert!(!view.browse_controls_visible);

    // 失败不落盘
    assert!(!std::path::Path::new(&temp_token_file("login_err")).exists());
}

#[tokio::test]
async fn test_bulk_create_sends_only_present_groups_after_middle_delete() {
    let server = MockServer::start().await;

    // 三组删掉中间一组后，载荷里只剩第一组和第三组
    Mock::given(method("POST"))
        .and(path("/api/bulk-products/"))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(body_json(json!([
            {
                "name": "A",
                "description": "desc",
                "price": "9.99",
                "stock_quantity": "5",
                "shop": "1",
            },
            {
                "name": "C",
                "description": "desc",
                "price": "9.99",
                "stock_quantity": "5",
                "shop": "1",
            },
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "bulk_create_delete", Some("tok-abc"));

    let id1 = panel.add_product_group().await;
    let id2 = panel.add_product_group().await;
    let id3 = panel.add_product_group().await;
    fill_group(&panel, id1, "A").await;
    fill_group(&panel, id2, "B").await;
    fill_group(&panel, id3, "C").await;

    panel.remove_product_group(id2).await.unwrap();
    panel.submit_bulk_create().await;

    let view = panel.view().await;
    assert_eq!(view.bulk_create_response, "Products created successfully!");

    // 提交成功后表单被清空
    assert!(panel.form_groups().await.is_empty());

    let _ = std::fs::remove_file(temp_token_file("bulk_create_delete"));
}

#[tokio::test]
async fn test_bulk_create_excludes_incomplete_groups() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bulk-products/"))
        .and(body_json(json!([
            {
                "name": "A",
                "description": "desc",
                "price": "9.99",
                "stock_quantity": "5",
                "shop": "1",
            },
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "bulk_create_partial", Some("tok-abc"));

    let id1 = panel.add_product_group().await;
    let id2 = panel.add_product_group().await;
    fill_group(&panel, id1, "A").await;
    // 第二组缺 price，应被静默跳过
    panel.set_group_field(id2, FormField::Name, "B").await.unwrap();
    panel
        .set_group_field(id2, FormField::Description, "desc")
        .await
        .unwrap();
    panel
        .set_group_field(id2, FormField::StockQuantity, "5")
        .await
        .unwrap();
    panel.set_group_field(id2, FormField::Shop, "1").await.unwrap();

    panel.submit_bulk_create().await;

    assert_eq!(
        panel.view().await.bulk_create_response,
        "Products created successfully!"
    );

    let _ = std::fs::remove_file(temp_token_file("bulk_create_partial"));
}

#[tokio::test]
async fn test_bulk_create_failure_keeps_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bulk-products/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Shopkeeper not found" })),
        )
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "bulk_create_err", Some("tok-abc"));

    let id = panel.add_product_group().await;
    fill_group(&panel, id, "A").await;
    panel.submit_bulk_create().await;

    assert_eq!(
        panel.view().await.bulk_create_response,
        "Error: Shopkeeper not found"
    );
    // 失败时不清空表单，用户可以修改后重试
    assert_eq!(panel.form_groups().await.len(), 1);

    let _ = std::fs::remove_file(temp_token_file("bulk_create_err"));
}

#[tokio::test]
async fn test_bulk_delete_trims_whitespace_in_ids() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/bulk-products/"))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(body_json(json!({ "ids": ["3", "4", "5"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "bulk_delete", Some("tok-abc"));
    panel.submit_bulk_delete("3, 4,5").await;

    assert_eq!(
        panel.view().await.bulk_delete_response,
        "Products deleted successfully!"
    );

    let _ = std::fs::remove_file(temp_token_file("bulk_delete"));
}

#[tokio::test]
async fn test_filter_sends_only_min_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "filter_min", Some("tok-abc"));
    panel
        .filter_products(ProductFilter {
            min_price: "10".to_string(),
            ..Default::default()
        })
        .await;

    // 查询串里只有 min_price=10
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("min_price=10"));

    let _ = std::fs::remove_file(temp_token_file("filter_min"));
}

#[tokio::test]
async fn test_filter_rejects_inverted_price_range_without_request() {
    let server = MockServer::start().await;

    let panel = mock_panel(&server, "filter_range", Some("tok-abc"));
    panel
        .filter_products(ProductFilter {
            min_price: "20".to_string(),
            max_price: "10".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(
        panel.view().await.products_response,
        "Error: min_price cannot be greater than max_price."
    );

    // 校验失败时不发请求
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());

    let _ = std::fs::remove_file(temp_token_file("filter_range"));
}

#[tokio::test]
async fn test_fetch_users_renders_lines() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "alice", "email": "alice@example.com", "role": "admin" },
            { "name": "bob", "email": "bob@example.com", "role": null },
        ])))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "fetch_users", Some("tok-abc"));
    panel.fetch_all_users().await;

    let view = panel.view().await;
    assert_eq!(
        view.users_list,
        vec![
            "alice || alice@example.com || admin",
            "bob || bob@example.com || -",
        ]
    );

    let _ = std::fs::remove_file(temp_token_file("fetch_users"));
}

#[tokio::test]
async fn test_fetch_products_fills_cache_and_filter_leaves_it_alone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "keyboard",
                "description": "mechanical",
                "price": "199.00",
                "stock_quantity": 12,
                "shop": 1,
                "shop_name": "TechWorld",
            },
            {
                "id": 2,
                "name": "mouse",
                "description": "wireless",
                "price": "59.00",
                "stock_quantity": 30,
                "shop": 1,
                "shop_name": "TechWorld",
            },
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/products/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "keyboard",
                "description": "mechanical",
                "price": "199.00",
                "stock_quantity": 12,
                "shop": 1,
                "shop_name": "TechWorld",
            },
        ])))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "fetch_products", Some("tok-abc"));

    panel.fetch_all_products().await;
    let view = panel.view().await;
    assert_eq!(
        view.products_list,
        vec![
            "keyboard || mechanical || 199.00 || 12 || TechWorld",
            "mouse || wireless || 59.00 || 30 || TechWorld",
        ]
    );
    assert_eq!(panel.cached_products().await.len(), 2);

    // 搜索只改列表，不动缓存
    panel
        .filter_products(ProductFilter {
            name: "keyboard".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(panel.view().await.products_list.len(), 1);
    assert_eq!(panel.cached_products().await.len(), 2);

    let _ = std::fs::remove_file(temp_token_file("fetch_products"));
}

#[tokio::test]
async fn test_authorized_action_without_token_renders_error_and_sends_nothing() {
    let server = MockServer::start().await;

    let panel = mock_panel(&server, "no_token", None);
    panel.fetch_all_products().await;

    assert_eq!(panel.view().await.products_response, "Error: Not logged in");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_create_user_renders_created_summary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/"))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(body_json(json!({
            "name": "carol",
            "email": "carol@example.com",
            "role": "customer",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "carol",
            "email": "carol@example.com",
        })))
        .mount(&server)
        .await;

    let panel = mock_panel(&server, "create_user", Some("tok-abc"));
    panel
        .create_user("carol", "carol@example.com", Role::Customer)
        .await;

    assert_eq!(
        panel.view().await.create_user_response,
        "User created: carol (carol@example.com)"
    );

    let _ = std::fs::remove_file(temp_token_file("create_user"));
}

#[tokio::test]
async fn test_stale_filter_result_is_discarded() {
    let server = MockServer::start().await;

    fn product(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "description": "d",
            "price": "1.00",
            "stock_quantity": 1,
            "shop_name": "s",
        })
    }

    // 先触发的搜索响应得慢，后触发的立刻返回
    Mock::given(method("GET"))
        .and(path("/api/products/search/"))
        .and(query_param("name", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([product("slow-product")]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/products/search/"))
        .and(query_param("name", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product("fast-product")])))
        .mount(&server)
        .await;

    let panel = Arc::new(mock_panel(&server, "race", Some("tok-abc")));

    let slow = {
        let panel = panel.clone();
        tokio::spawn(async move {
            panel
                .filter_products(ProductFilter {
                    name: "slow".to_string(),
                    ..Default::default()
                })
                .await;
        })
    };

    // 等慢请求先出发，再触发第二次搜索
    tokio::time::sleep(Duration::from_millis(100)).await;
    panel
        .filter_products(ProductFilter {
            name: "fast".to_string(),
            ..Default::default()
        })
        .await;

    slow.await.unwrap();

    // 慢的那次先触发但后返回，它的结果被丢弃
    assert_eq!(
        panel.view().await.products_list,
        vec!["fast-product || d || 1.00 || 1 || s"]
    );

    let _ = std::fs::remove_file(temp_token_file("race"));
}

#[tokio::test]
async fn test_logout_clears_token_and_restores_login_form() {
    let server = MockServer::start().await;

    let panel = mock_panel(&server, "logout", Some("tok-abc"));
    panel.logout().await;

    let view = panel.view().await;
    assert!(view.login_form_visible);
    assert!(!view.browse_controls_visible);
    assert!(!std::path::Path::new(&temp_token_file("logout")).exists());

    // 注销后再访问受保护接口会提示未登录
    panel.fetch_all_users().await;
    assert_eq!(panel.view().await.users_response, "Error: Not logged in");
}
