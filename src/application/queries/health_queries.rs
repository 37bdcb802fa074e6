//! Health Queries

/// 健康检查：能取得句柄并完成一次只读查询即视为健康
#[derive(Debug, Clone)]
pub struct CheckHealth;
