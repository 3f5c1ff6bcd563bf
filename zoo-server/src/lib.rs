//! Zoo Server - 动物园只读查询服务
//!
//! Serves HTML fragments for zookeepers, enclosures and animals stored in a
//! SQLite database. Nothing is written by this crate; rows come from an
//! external seeding process.
//!
//! # 模块结构
//!
//! ```text
//! zoo-server/src/
//! ├── server/        # 配置、状态、中间件、HTTP 服务器
//! ├── db/            # 连接池、迁移、记录类型、查询
//! ├── views/         # HTML 片段
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod db;
pub mod server;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use db::DbService;
pub use server::{AppState, Config, ConfigError, LogFormat, Server};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};
