// ==========================================
// 仓储设施管理系统 - 布局与默认值配置
// ==========================================
// 职责: 启动时的存储树形态、租期策略、租赁默认值
// 存储: 内存常驻,可从 JSON 快照加载/导出
// ==========================================

use crate::domain::types::LeaseTermPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("无效布局: {0}")]
    InvalidLayout(String),

    #[error("无效默认值: {0}")]
    InvalidDefaults(String),

    #[error("配置快照解析失败: {0}")]
    SnapshotParseError(#[from] serde_json::Error),
}

// ==========================================
// WardrobeLayout - 单个储物柜布局
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeLayout {
    pub shelves: Vec<usize>, // 每个货架的储物格数量 (按装配顺序)
}

// ==========================================
// LayoutConfig - 存储树布局
// ==========================================
// 默认: 一个储物柜,两个货架,储物格 2 + 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub wardrobes: Vec<WardrobeLayout>, // 储物柜序列 (按装配顺序)
}

impl LayoutConfig {
    /// 全树储物格总数
    pub fn total_cell_count(&self) -> usize {
        self.wardrobes
            .iter()
            .flat_map(|w| w.shelves.iter())
            .sum()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wardrobes: vec![WardrobeLayout {
                shelves: vec![2, 1],
            }],
        }
    }
}

// ==========================================
// RentalDefaults - 租赁默认值
// ==========================================
// 命令只携带申请容量时,由这里补齐承租方标签与租期
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDefaults {
    pub renter_label: String,       // 固定承租方标签
    pub default_duration_days: i64, // 默认租期 (天)
}

impl Default for RentalDefaults {
    fn default() -> Self {
        Self {
            renter_label: "承租方".to_string(),
            default_duration_days: 50,
        }
    }
}

// ==========================================
// StorageConfig - 系统配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub layout: LayoutConfig,           // 启动布局
    pub lease_terms: LeaseTermPolicy,   // 各节点类型的租期偏移策略
    pub rental_defaults: RentalDefaults, // 租赁默认值
}

impl StorageConfig {
    /// 校验配置
    ///
    /// # 返回
    /// - `Ok(())`: 配置可用于装配存储树
    /// - `Err(ConfigError)`: 校验失败,携带显式原因
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.wardrobes.is_empty() {
            return Err(ConfigError::InvalidLayout(
                "至少需要一个储物柜".to_string(),
            ));
        }
        if self.layout.total_cell_count() == 0 {
            return Err(ConfigError::InvalidLayout(
                "至少需要一个储物格".to_string(),
            ));
        }
        if self.rental_defaults.renter_label.trim().is_empty() {
            return Err(ConfigError::InvalidDefaults(
                "承租方标签不能为空".to_string(),
            ));
        }
        if self.rental_defaults.default_duration_days <= 0 {
            return Err(ConfigError::InvalidDefaults(
                "默认租期必须为正数".to_string(),
            ));
        }
        Ok(())
    }

    /// 从 JSON 快照加载配置
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: StorageConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// 导出配置快照 (JSON)
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_bootstrap_shape() {
        // 默认布局: 一柜两架,储物格 2 + 1
        let config = StorageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.wardrobes.len(), 1);
        assert_eq!(config.layout.wardrobes[0].shelves, vec![2, 1]);
        assert_eq!(config.layout.total_cell_count(), 3);
        assert_eq!(config.rental_defaults.default_duration_days, 50);
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        let mut config = StorageConfig::default();
        config.layout.wardrobes.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLayout(_))
        ));

        let mut config = StorageConfig::default();
        config.layout.wardrobes[0].shelves = vec![0, 0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_rental_defaults() {
        let mut config = StorageConfig::default();
        config.rental_defaults.renter_label = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDefaults(_))
        ));

        let mut config = StorageConfig::default();
        config.rental_defaults.default_duration_days = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDefaults(_))
        ));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let config = StorageConfig::default();
        let snapshot = config.to_json_string().unwrap();
        let restored = StorageConfig::from_json_str(&snapshot).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_snapshot_falls_back_to_defaults() {
        // 只覆写布局,其余字段回落默认值
        let raw = r#"{"layout":{"wardrobes":[{"shelves":[1]}]}}"#;
        let config = StorageConfig::from_json_str(raw).unwrap();
        assert_eq!(config.layout.total_cell_count(), 1);
        assert_eq!(config.lease_terms, LeaseTermPolicy::default());
        assert_eq!(config.rental_defaults, RentalDefaults::default());
    }
}
