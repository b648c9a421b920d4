//! 管理面板的控制台入口
//!
//! 页面上的每个表单提交和按钮点击在这里对应一条命令，
//! 命令执行完后把视图里的结果打印出来

use anyhow::Result;
use shop_admin_panel::orchestrator::AdminPanel;
use shop_admin_panel::utils::logging;
use shop_admin_panel::{Config, FormField, ProductFilter, Role};
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

/// 默认配置文件路径
const CONFIG_FILE: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：有 config.toml 用文件，否则用环境变量
    let config = if std::path::Path::new(CONFIG_FILE).exists() {
        Config::from_file(CONFIG_FILE).await?
    } else {
        Config::from_env()
    };

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::init_log_file(&config.output_log_file)?;
    logging::log_startup(&config.api_base_url);

    // 初始化并运行面板
    let panel = AdminPanel::initialize(config)?;
    run_console(&panel).await
}

/// 控制台主循环
async fn run_console(panel: &AdminPanel) -> Result<()> {
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "help" => print_help(),
            "quit" | "exit" => break,
            "signup" => handle_signup(panel, rest).await,
            "login" => handle_login(panel, rest).await,
            "logout" => {
                panel.logout().await;
                println!("已注销，回到登录界面");
            }
            "users" => {
                panel.fetch_all_users().await;
                let view = panel.view().await;
                print_response(&view.users_response);
                print_list(&view.users_list);
            }
            "adduser" => handle_adduser(panel, rest).await,
            "products" => {
                panel.fetch_all_products().await;
                let view = panel.view().await;
                print_response(&view.products_response);
                print_list(&view.products_list);
            }
            "filter" => handle_filter(panel, rest).await,
            "add" => {
                let id = panel.add_product_group().await;
                println!("新增商品输入组 #{}", id);
            }
            "set" => handle_set(panel, rest).await,
            "del" => handle_del(panel, rest).await,
            "groups" => print_groups(panel).await,
            "submit" => {
                panel.submit_bulk_create().await;
                print_response(&panel.view().await.bulk_create_response);
            }
            "bulkdel" => {
                panel.submit_bulk_delete(rest).await;
                print_response(&panel.view().await.bulk_delete_response);
            }
            "show" => print_panel(panel).await,
            _ => println!("⚠️ 未知命令: {}（输入 help 查看用法）", command),
        }
    }

    println!("再见 👋");
    Ok(())
}

/// 注册: signup <用户名> <邮箱> <角色> <密码>
async fn handle_signup(panel: &AdminPanel, rest: &str) {
    let args: Vec<&str> = rest.split_whitespace().collect();
    let [name, email, role, password] = args.as_slice() else {
        println!("用法: signup <用户名> <邮箱> <角色> <密码>");
        return;
    };

    let Some(role) = Role::from_str(role) else {
        println!("⚠️ 无效角色: {}（可选 admin / shopkeeper / customer）", role);
        return;
    };

    panel.register(name, email, role, password).await;
    print_response(&panel.view().await.sign_up_response);
}

/// 登录: login <邮箱> <密码>
async fn handle_login(panel: &AdminPanel, rest: &str) {
    let args: Vec<&str> = rest.split_whitespace().collect();
    let [email, password] = args.as_slice() else {
        println!("用法: login <邮箱> <密码>");
        return;
    };

    panel.login(email, password).await;

    let view = panel.view().await;
    print_response(&view.login_response);
    if view.browse_controls_visible {
        println!("🛒 商品浏览控件已解锁（products / filter / users 可用）");
    }
}

/// 新建用户: adduser <用户名> <邮箱> <角色>
async fn handle_adduser(panel: &AdminPanel, rest: &str) {
    let args: Vec<&str> = rest.split_whitespace().collect();
    let [name, email, role] = args.as_slice() else {
        println!("用法: adduser <用户名> <邮箱> <角色>");
        return;
    };

    let Some(role) = Role::from_str(role) else {
        println!("⚠️ 无效角色: {}（可选 admin / shopkeeper / customer）", role);
        return;
    };

    panel.create_user(name, email, role).await;
    print_response(&panel.view().await.create_user_response);
}

/// 筛选: filter [name=..] [min=..] [max=..] [shop=..]
async fn handle_filter(panel: &AdminPanel, rest: &str) {
    let mut filter = ProductFilter::default();

    for arg in rest.split_whitespace() {
        match arg.split_once('=') {
            Some(("name", v)) => filter.name = v.to_string(),
            Some(("min", v)) => filter.min_price = v.to_string(),
            Some(("max", v)) => filter.max_price = v.to_string(),
            Some(("shop", v)) => filter.shop_name = v.to_string(),
            _ => {
                println!("⚠️ 无法识别的筛选条件: {}", arg);
                return;
            }
        }
    }

    panel.filter_products(filter).await;
    let view = panel.view().await;
    print_response(&view.products_response);
    print_list(&view.products_list);
}

/// 填写字段: set <组ID> <字段> <值>
async fn handle_set(panel: &AdminPanel, rest: &str) {
    let mut parts = rest.splitn(3, ' ');
    let (Some(id), Some(field), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
        println!("用法: set <组ID> <字段> <值>（字段: name/description/price/stock/shop）");
        return;
    };

    let Ok(id) = id.parse::<u64>() else {
        println!("⚠️ 组ID必须是数字: {}", id);
        return;
    };
    let Some(field) = FormField::from_str(field) else {
        println!("⚠️ 未知字段: {}（可选 name/description/price/stock/shop）", field);
        return;
    };

    if let Err(e) = panel.set_group_field(id, field, value.trim()).await {
        println!("⚠️ {}", e);
    }
}

/// 删除输入组: del <组ID>
async fn handle_del(panel: &AdminPanel, rest: &str) {
    let Ok(id) = rest.trim().parse::<u64>() else {
        println!("用法: del <组ID>");
        return;
    };

    match panel.remove_product_group(id).await {
        Ok(()) => println!("已删除商品输入组 #{}", id),
        Err(e) => println!("⚠️ {}", e),
    }
}

/// 显示当前所有输入组
async fn print_groups(panel: &AdminPanel) {
    let groups = panel.form_groups().await;
    if groups.is_empty() {
        println!("（表单为空，用 add 新增一组）");
        return;
    }

    for g in groups {
        let mark = if g.is_complete() { "✓" } else { "…" };
        println!(
            "[{}] #{} name={} description={} price={} stock={} shop={}",
            mark, g.id, g.name, g.description, g.price, g.stock_quantity, g.shop
        );
    }
}

/// 显示面板整体状态
async fn print_panel(panel: &AdminPanel) {
    let view = panel.view().await;

    println!("{}", "─".repeat(60));
    println!(
        "登录表单: {} | 浏览控件: {}",
        if view.login_form_visible { "可见" } else { "隐藏" },
        if view.browse_controls_visible { "可见" } else { "隐藏" }
    );
    print_response(&view.sign_up_response);
    print_response(&view.login_response);
    print_response(&view.create_user_response);
    print_response(&view.bulk_create_response);
    print_response(&view.bulk_delete_response);
    print_response(&view.users_response);
    print_response(&view.products_response);

    if !view.users_list.is_empty() {
        println!("用户列表 ({} 条):", view.users_list.len());
        print_list(&view.users_list);
    }
    if !view.products_list.is_empty() {
        println!("商品列表 ({} 条):", view.products_list.len());
        print_list(&view.products_list);
    }

    let cached = panel.cached_products().await.len();
    println!("商品缓存: {} 条", cached);
    println!("{}", "─".repeat(60));
}

fn print_response(message: &str) {
    if !message.is_empty() {
        println!("{}", message);
    }
}

fn print_list(lines: &[String]) {
    for line in lines {
        println!("  {}", line);
    }
}

fn print_help() {
    println!("{}", "=".repeat(60));
    println!("可用命令:");
    println!("  signup <用户名> <邮箱> <角色> <密码>   注册");
    println!("  login <邮箱> <密码>                    登录");
    println!("  logout                                 注销");
    println!("  users                                  获取全部用户");
    println!("  adduser <用户名> <邮箱> <角色>         新建用户");
    println!("  products                               获取全部商品");
    println!("  filter [name=..][min=..][max=..][shop=..]  按条件筛选");
    println!("  add / set <组ID> <字段> <值> / del <组ID> / groups");
    println!("                                         维护商品录入表单");
    println!("  submit                                 批量创建表单里的商品");
    println!("  bulkdel <id,id,...>                    批量删除商品");
    println!("  show / help / quit");
    println!("{}", "=".repeat(60));
}
