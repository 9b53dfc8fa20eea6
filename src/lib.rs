//! # docask
//!
//! ローカルのドキュメントを OpenAI にアップロードしてベクターストアに取り込み、
//! その内容だけに基づいて質問に答える CLI ツール
//!
//! 検索・チャンク分割・インデックス作成はすべてプロバイダ側で行われ、
//! このクレートはアップロードの制御、インデックス作成ジョブのポーリング、
//! 対話ループだけを担当します。
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、入力の分類（外部依存なし）
//! - **Application層**: ユースケース（入力の展開、アップロード、インデックス作成、質問応答）
//! - **Adapter層**: OpenAI API クライアント、設定
//! - **Driver層**: CLI、対話ループ、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
