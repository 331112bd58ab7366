// ==========================================
// 仓储设施管理系统 - 租赁领域模型
// ==========================================
// 职责: 定义租赁记录与租赁台账
// 约束: 租赁只持有储物格的非拥有引用 (cell_id),
//       从不进入组合树的子节点序列
// ==========================================

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Rental - 租赁记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: String,  // 租赁ID (创建时生成)
    pub renter: String,     // 承租方名称
    pub size_units: u32,    // 申请容量 (当前仅做台账记录)
    pub cell_id: String,    // 占用的储物格 (非拥有引用)
    pub start: DateTime<Utc>, // 起租时间
    pub duration_days: i64, // 租期 (天)
}

impl Rental {
    /// 创建租赁记录
    ///
    /// # 参数
    /// - `renter`: 承租方名称
    /// - `size_units`: 申请容量
    /// - `duration_days`: 租期天数
    /// - `cell_id`: 分配到的储物格ID
    /// - `start`: 起租时间
    pub fn new(
        renter: &str,
        size_units: u32,
        duration_days: i64,
        cell_id: &str,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            rental_id: uuid::Uuid::new_v4().to_string(),
            renter: renter.to_string(),
            size_units,
            cell_id: cell_id.to_string(),
            start,
            duration_days,
        }
    }

    /// 计算到期日期
    ///
    /// 唯一由实例数据推导截止日期的实体: start + duration
    pub fn end_date(&self) -> DateTime<Utc> {
        self.start + Duration::days(self.duration_days)
    }
}

// ==========================================
// RentalLedger - 租赁台账
// ==========================================
// 以储物格ID为键的顶层登记簿,独立于组合树
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalLedger {
    by_cell: HashMap<String, Vec<Rental>>, // cell_id -> 该格上的租赁记录
}

impl RentalLedger {
    /// 创建空台账
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记租赁记录
    pub fn register(&mut self, rental: Rental) {
        tracing::debug!(
            rental_id = %rental.rental_id,
            cell_id = %rental.cell_id,
            renter = %rental.renter,
            "登记租赁记录"
        );
        self.by_cell
            .entry(rental.cell_id.clone())
            .or_default()
            .push(rental);
    }

    /// 查询指定储物格上的租赁记录
    pub fn rentals_for_cell(&self, cell_id: &str) -> &[Rental] {
        self.by_cell.get(cell_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 储物格是否已有租赁登记
    pub fn is_cell_reserved(&self, cell_id: &str) -> bool {
        !self.rentals_for_cell(cell_id).is_empty()
    }

    /// 台账内租赁记录总数
    pub fn total_count(&self) -> usize {
        self.by_cell.values().map(Vec::len).sum()
    }
}
