//! User-Facing Messages
//!
//! Every string the core shows to a user, per locale.

use serde::{Deserialize, Serialize};

/// Display language for toasts, dialog defaults and error fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
}

/// Localized message table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fallback message for a failed response that carried no server message.
    pub fn for_status(&self, status: u16) -> &'static str {
        match self.locale {
            Locale::English => match status {
                400 => "Please check your input.",
                401 => "Authentication required. Please sign in again.",
                403 => "You do not have permission to do that.",
                404 => "The requested item was not found.",
                409 => "This conflicted with another change. Reload and try again.",
                422 => "Some of the input is invalid.",
                429 => "Too many requests. Please wait a moment and try again.",
                500 => "Something went wrong. Please try again later.",
                _ => "The request failed.",
            },
            Locale::Japanese => match status {
                400 => "入力内容を確認してください。",
                401 => "認証が必要です。再ログインしてください。",
                403 => "操作の権限がありません。",
                404 => "対象が見つかりませんでした。",
                409 => "他の操作と競合しました。再読み込みしてやり直してください。",
                422 => "入力に誤りがあります。",
                429 => "短時間に操作が多すぎます。少し待って再試行してください。",
                500 => "問題が発生しました。時間をおいて再試行してください。",
                _ => "処理に失敗しました。",
            },
        }
    }

    pub fn network_error(&self) -> &'static str {
        match self.locale {
            Locale::English => "Unable to reach the server.",
            Locale::Japanese => "ネットワークに接続できません。",
        }
    }

    pub fn saved(&self) -> &'static str {
        match self.locale {
            Locale::English => "Saved.",
            Locale::Japanese => "保存しました。",
        }
    }

    pub fn deleted(&self) -> &'static str {
        match self.locale {
            Locale::English => "Deleted.",
            Locale::Japanese => "削除しました。",
        }
    }

    pub fn unexpected_error(&self) -> &'static str {
        match self.locale {
            Locale::English => "An unexpected error occurred.",
            Locale::Japanese => "予期しないエラーが発生しました。",
        }
    }

    /// Inline text for a field detail that arrived without a message
    pub fn invalid_field(&self) -> &'static str {
        match self.locale {
            Locale::English => "This value is invalid.",
            Locale::Japanese => "入力が正しくありません。",
        }
    }

    pub fn offline(&self) -> &'static str {
        match self.locale {
            Locale::English => "You are offline.",
            Locale::Japanese => "オフラインになりました。",
        }
    }

    pub fn online(&self) -> &'static str {
        match self.locale {
            Locale::English => "You are back online.",
            Locale::Japanese => "オンラインになりました。",
        }
    }

    pub fn confirm_title(&self) -> &'static str {
        match self.locale {
            Locale::English => "Confirm",
            Locale::Japanese => "確認",
        }
    }

    pub fn confirm_delete(&self) -> &'static str {
        match self.locale {
            Locale::English => "Delete",
            Locale::Japanese => "削除する",
        }
    }

    pub fn cancel(&self) -> &'static str {
        match self.locale {
            Locale::English => "Cancel",
            Locale::Japanese => "キャンセル",
        }
    }

    // ========================
    // Client-side validation
    // ========================

    pub fn required(&self) -> &'static str {
        match self.locale {
            Locale::English => "This field is required.",
            Locale::Japanese => "入力してください。",
        }
    }

    pub fn too_long(&self, max: usize) -> String {
        match self.locale {
            Locale::English => format!("Must be at most {} characters.", max),
            Locale::Japanese => format!("{}文字以内で入力してください。", max),
        }
    }

    pub fn invalid_color(&self) -> &'static str {
        match self.locale {
            Locale::English => "Use a color like #667eea.",
            Locale::Japanese => "#667eea の形式で入力してください。",
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
