// ==========================================
// 仓储设施管理系统 - 控制台主入口
// ==========================================
// 职责: 菜单渲染与行输入解析 (引擎只接收已验证的原始参数)
// ==========================================

use std::io::{self, BufRead, Write};

use warehouse_storage::app::{dispatch, AppState, Command};
use warehouse_storage::config::StorageConfig;
use warehouse_storage::i18n;

fn main() {
    // 初始化日志系统
    warehouse_storage::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", warehouse_storage::APP_NAME);
    tracing::info!("系统版本: {}", warehouse_storage::VERSION);
    tracing::info!("==================================================");

    // 可选: 第一个命令行参数指向配置快照 (JSON)
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("加载配置快照: {}", path);
            let raw = std::fs::read_to_string(&path).expect("无法读取配置快照");
            StorageConfig::from_json_str(&raw).expect("配置快照解析失败")
        }
        None => StorageConfig::default(),
    };

    // 创建AppState (启动时装配一次,进程内独占持有)
    let mut state = AppState::new(config).expect("无法初始化AppState");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();

        let Some(choice) = read_trimmed(&mut lines) else {
            break;
        };
        let Ok(choice) = choice.parse::<u32>() else {
            println!("{}", i18n::t("menu.invalid_number"));
            continue;
        };

        let command = match choice {
            1 => {
                println!("{}", i18n::t("menu.prompt_name"));
                let Some(name) = read_trimmed(&mut lines) else {
                    break;
                };
                println!("{}", i18n::t("menu.prompt_quantity"));
                let Some(raw_quantity) = read_trimmed(&mut lines) else {
                    break;
                };
                let Ok(quantity) = raw_quantity.parse::<u32>() else {
                    println!("{}", i18n::t("menu.invalid_number"));
                    continue;
                };
                Command::PlaceItem { name, quantity }
            }
            2 => {
                println!("{}", i18n::t("menu.prompt_name"));
                let Some(name) = read_trimmed(&mut lines) else {
                    break;
                };
                Command::RemoveItem { name }
            }
            3 => Command::Sort,
            4 => {
                println!("{}", i18n::t("menu.prompt_size"));
                let Some(raw_size) = read_trimmed(&mut lines) else {
                    break;
                };
                let Ok(size_units) = raw_size.parse::<u32>() else {
                    println!("{}", i18n::t("menu.invalid_number"));
                    continue;
                };
                Command::ReserveRental { size_units }
            }
            5 => Command::GenerateReport,
            6 => Command::DisplayContent,
            0 => {
                println!("{}", i18n::t("menu.goodbye"));
                break;
            }
            _ => {
                println!("{}", i18n::t("menu.invalid_choice"));
                continue;
            }
        };

        let outcome = dispatch(&mut state, command);
        for line in outcome.render_lines() {
            println!("{}", line);
        }
    }
}

/// 渲染主菜单
fn print_menu() {
    println!();
    println!("{}", i18n::t("menu.title"));
    println!("{}", i18n::t("menu.option_add"));
    println!("{}", i18n::t("menu.option_remove"));
    println!("{}", i18n::t("menu.option_sort"));
    println!("{}", i18n::t("menu.option_rent"));
    println!("{}", i18n::t("menu.option_report"));
    println!("{}", i18n::t("menu.option_display"));
    println!("{}", i18n::t("menu.option_exit"));
    let _ = io::stdout().flush();
}

/// 读取一行并去除首尾空白; 输入流结束时返回 None
fn read_trimmed(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}
