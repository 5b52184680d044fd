//! ポート: ライブラリが外界（FS・時刻・環境変数・コンソール）を使うための trait

pub mod outbound;
