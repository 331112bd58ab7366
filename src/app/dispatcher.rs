// ==========================================
// 仓储设施管理系统 - 命令分发器
// ==========================================
// 职责: 每条用户命令对应一次引擎操作,返回结构化结果
// 约束: 分发器不解析文本,只接收已验证的原始参数;
//       渲染由外部控制台层完成
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::state::AppState;
use crate::domain::item::Item;
use crate::domain::rental::Rental;
use crate::domain::report::InventoryReport;
use crate::engine::allocator::PlacementOutcome;
use crate::engine::sorter::SortTrace;
use crate::i18n;

// ==========================================
// Command - 用户命令
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// 添加物品
    PlaceItem { name: String, quantity: u32 },
    /// 按名称移除物品
    RemoveItem { name: String },
    /// 整理 (三级握手,不重排)
    Sort,
    /// 预订租赁
    ReserveRental { size_units: u32 },
    /// 生成库存报表
    GenerateReport,
    /// 展示全树内容
    DisplayContent,
}

// ==========================================
// CommandOutcome - 命令结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub enum CommandOutcome {
    /// 物品已放置
    Placed(PlacementOutcome),
    /// 物品已移除
    Removed(Item),
    /// 整理轨迹
    Sorted(SortTrace),
    /// 租赁已登记
    Reserved(Rental),
    /// 库存报表
    Reported(InventoryReport),
    /// 全树内容渲染行
    Displayed(Vec<String>),
    /// 业务失败 (可恢复,进程继续)
    Failed { code: String, message: String },
}

impl CommandOutcome {
    /// 是否为失败结果
    pub fn is_failed(&self) -> bool {
        matches!(self, CommandOutcome::Failed { .. })
    }

    /// 渲染为控制台输出行
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            CommandOutcome::Placed(outcome) => vec![i18n::t_with_args(
                "outcome.placed",
                &[("cell_id", &outcome.cell_id)],
            )],
            CommandOutcome::Removed(item) => vec![i18n::t_with_args(
                "outcome.removed",
                &[("name", &item.name)],
            )],
            CommandOutcome::Sorted(trace) => vec![i18n::t_with_args(
                "outcome.sorted",
                &[("events", &trace.events.len().to_string())],
            )],
            CommandOutcome::Reserved(rental) => vec![i18n::t_with_args(
                "outcome.reserved",
                &[
                    ("cell_id", &rental.cell_id),
                    ("end_date", &rental.end_date().format("%Y-%m-%d").to_string()),
                ],
            )],
            CommandOutcome::Reported(report) => report.render(),
            CommandOutcome::Displayed(lines) => lines.clone(),
            CommandOutcome::Failed { message, .. } => vec![i18n::t_with_args(
                "outcome.failed",
                &[("message", message)],
            )],
        }
    }

    /// 渲染为 JSON 值 (供结构化消费方使用)
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ==========================================
// 命令分发
// ==========================================

/// 分发一条命令
///
/// 每次调用对应一次引擎操作: 要么完整成功 (至多变更一个储物格),
/// 要么零变更并返回 Failed 结果; 进程从不因业务失败终止
pub fn dispatch(state: &mut AppState, command: Command) -> CommandOutcome {
    info!(?command, "分发命令");

    let result = match command {
        Command::PlaceItem { name, quantity } => state
            .storage
            .place_item(&name, quantity)
            .map(CommandOutcome::Placed),
        Command::RemoveItem { name } => state
            .storage
            .remove_item_by_name(&name)
            .map(CommandOutcome::Removed),
        Command::Sort => Ok(CommandOutcome::Sorted(state.storage.sort())),
        Command::ReserveRental { size_units } => state
            .storage
            .reserve_rental(size_units)
            .map(CommandOutcome::Reserved),
        Command::GenerateReport => Ok(CommandOutcome::Reported(state.storage.collect_report())),
        Command::DisplayContent => Ok(CommandOutcome::Displayed(state.storage.display_content())),
    };

    match result {
        Ok(outcome) => outcome,
        Err(err) => CommandOutcome::Failed {
            code: err.code().to_string(),
            message: err.to_string(),
        },
    }
}
