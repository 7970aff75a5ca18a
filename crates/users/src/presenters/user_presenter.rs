use crate::entities::User;

use super::Presentable;

/// Relative path served when a user has not uploaded an avatar.
const DEFAULT_AVATAR: &str = "/img/avatar.png";

/// Read-only view over a [`User`], formatting attributes for display.
pub struct UserPresenter<'a> {
    user: &'a User,
}

impl<'a> UserPresenter<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }

    /// The underlying user this presenter is bound to.
    pub fn object(&self) -> &'a User {
        self.user
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Avatar URL, falling back to the bundled default image.
    pub fn avatar_url(&self) -> String {
        self.user.avatar_url().unwrap_or_else(|| {
            format!("{}{}", slipway_config::current().app.url, DEFAULT_AVATAR)
        })
    }

    pub fn two_factor_label(&self) -> &'static str {
        if self.user.has_two_factor_authentication() {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

impl Presentable for User {
    type Presenter<'a> = UserPresenter<'a>
    where
        Self: 'a;

    fn presenter(&self) -> UserPresenter<'_> {
        UserPresenter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipway_config::AppConfig;

    fn install_test_config() {
        let mut config = AppConfig::default();
        config.app.url = "https://app.test".to_string();
        slipway_config::install(config);
    }

    #[test]
    fn presenter_is_bound_to_the_same_instance() {
        let user = User::new("Admin", "admin@example.com");
        let presenter = user.presenter();

        assert!(std::ptr::eq(presenter.object(), &user));
    }

    #[test]
    fn presenter_formats_avatar_url() {
        install_test_config();

        let mut user = User::new("Admin", "admin@example.com");
        user.avatar = Some("/an/image.jpg".to_string());

        let presenter = user.presenter();
        assert_eq!(presenter.avatar_url(), "https://app.test/an/image.jpg");
    }

    #[test]
    fn presenter_falls_back_to_default_avatar() {
        install_test_config();

        let user = User::new("Admin", "admin@example.com");
        let presenter = user.presenter();

        assert_eq!(presenter.avatar_url(), "https://app.test/img/avatar.png");
    }

    #[test]
    fn presenter_labels_two_factor_state() {
        let mut user = User::new("Admin", "admin@example.com");
        assert_eq!(user.presenter().two_factor_label(), "Disabled");

        user.google2fa_secret = Some("a-2fa-secret".to_string());
        assert_eq!(user.presenter().two_factor_label(), "Enabled");
    }
}
