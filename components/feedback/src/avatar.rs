//! User avatars and user cards.

use markupui_core::{
    Block, Build, Environment, HasAttributes, HasChildren, Node, configurable,
    host::{User, UserId, role_label},
    html,
};

use crate::style;

/// Resolves `id`, or the logged-in user when `id` is `None`.
fn lookup(env: &Environment, id: Option<UserId>) -> Option<User> {
    let user = match id {
        Some(id) => env.users().user(id),
        None => env.current_user(),
    };
    if user.is_none() {
        tracing::debug!(?id, "unknown user; rendering a placeholder");
    }
    user
}

/// Configuration for [`Avatar`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct AvatarConfig {
    /// Whose avatar to show; `None` is the current user.
    pub user_id: Option<UserId>,
    /// Edge length in pixels; `None` uses the configured avatar size.
    pub size: Option<u32>,
}

impl Block for AvatarConfig {
    const NAME: &'static str = "user-avatar";
}

impl Build for AvatarConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-avatar", style::AVATAR);
        let size = self.size.unwrap_or(env.config().avatar_size);
        let user = lookup(env, self.user_id);

        let wrapper = html::span()
            .class(Self::NAME)
            .style(&format!("width: {size}px; height: {size}px"));

        if let Some(markup) = user.as_ref().and_then(|user| env.avatars().avatar(user, size)) {
            return wrapper.child(Node::raw(markup)).into();
        }

        let (name, initials) = user.map_or_else(
            || (env.translate("Unknown user"), "?".to_owned()),
            |user| (user.display_name.clone(), user.initials()),
        );
        wrapper
            .class(&Self::parts().variant("placeholder"))
            .attr("role", "img")
            .aria("label", name)
            .text(initials)
            .into()
    }
}

configurable!(
    /// A user's avatar, or their initials when the host has no avatar.
    Avatar,
    AvatarConfig
);

impl Avatar {
    /// The avatar of user `user_id`.
    pub fn new(env: &Environment, user_id: UserId) -> Self {
        Self::from_config(
            env,
            AvatarConfig {
                user_id: Some(user_id),
                size: None,
            },
        )
    }

    /// The avatar of whoever is logged in.
    pub fn current(env: &Environment) -> Self {
        Self::from_config(env, AvatarConfig::default())
    }

    /// Sets the edge length in pixels.
    pub fn size(mut self, size: u32) -> Self {
        self.config_mut().size = Some(size);
        self
    }
}

/// Configuration for [`UserCard`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct UserCardConfig {
    /// Whose card to show; `None` is the current user.
    pub user_id: Option<UserId>,
    /// Avatar edge length; `None` uses the configured avatar size.
    pub avatar_size: Option<u32>,
    /// Shows a mailto link.
    pub show_email: bool,
    /// Shows the role labels.
    pub show_roles: bool,
}

impl Default for UserCardConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            avatar_size: None,
            show_email: true,
            show_roles: true,
        }
    }
}

impl Block for UserCardConfig {
    const NAME: &'static str = "user-card";
}

impl Build for UserCardConfig {
    fn build(&self, env: &Environment) -> Node {
        env.enqueue_style("markupui-user-card", style::USER_CARD);
        let parts = Self::parts();
        let avatar = AvatarConfig {
            user_id: self.user_id,
            size: self.avatar_size,
        }
        .build(env);

        let Some(user) = lookup(env, self.user_id) else {
            return html::div()
                .class(Self::NAME)
                .class(&parts.variant("unknown"))
                .child(avatar)
                .child(
                    html::div().class(&parts.part("details")).child(
                        html::strong(env.translate("Unknown user")).class(&parts.part("name")),
                    ),
                )
                .into();
        };

        let mut details = html::div()
            .class(&parts.part("details"))
            .child(html::strong(user.display_name.as_str()).class(&parts.part("name")));
        if self.show_email && !user.email.is_empty() {
            details.push_child(
                html::a(env.url(&format!("mailto:{}", user.email)), user.email.as_str())
                    .class(&parts.part("email")),
            );
        }
        if self.show_roles && !user.roles.is_empty() {
            let roles = user
                .roles
                .iter()
                .map(|slug| env.translate(&role_label(slug)))
                .collect::<Vec<_>>()
                .join(", ");
            details.push_child(html::span().class(&parts.part("roles")).text(roles));
        }

        html::div()
            .class(Self::NAME)
            .child(avatar)
            .child(details)
            .into()
    }
}

configurable!(
    /// Avatar, name, email and roles of one user.
    UserCard,
    UserCardConfig
);

impl UserCard {
    /// The card of user `user_id`.
    pub fn new(env: &Environment, user_id: UserId) -> Self {
        Self::from_config(
            env,
            UserCardConfig {
                user_id: Some(user_id),
                ..UserCardConfig::default()
            },
        )
    }

    /// The card of whoever is logged in.
    pub fn current(env: &Environment) -> Self {
        Self::from_config(env, UserCardConfig::default())
    }

    /// Sets the avatar edge length.
    pub fn avatar_size(mut self, size: u32) -> Self {
        self.config_mut().avatar_size = Some(size);
        self
    }

    /// Hides the email link.
    pub fn hide_email(mut self) -> Self {
        self.config_mut().show_email = false;
        self
    }

    /// Hides the roles.
    pub fn hide_roles(mut self) -> Self {
        self.config_mut().show_roles = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::{
        Render,
        host::{AvatarTemplate, StaticUsers, Translator},
    };

    use super::*;

    #[derive(Debug)]
    struct Shouting;

    impl Translator for Shouting {
        fn translate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    fn users() -> StaticUsers {
        StaticUsers::new().with_user(
            User::new(7, "Ada Lovelace")
                .with_email("ada@example.com")
                .with_role("administrator")
                .with_role("shop_manager"),
        )
    }

    #[test]
    fn placeholder_shows_initials() {
        let env = Environment::builder().users(users()).build();
        assert_eq!(
            Avatar::new(&env, 7).render(),
            r#"<span class="user-avatar user-avatar--placeholder" style="width: 32px; height: 32px" role="img" aria-label="Ada Lovelace">AL</span>"#
        );
    }

    #[test]
    fn unknown_user_gets_question_mark() {
        let env = Environment::new();
        let markup = Avatar::new(&env, 99).size(24).render();
        assert!(markup.contains("width: 24px"));
        assert!(markup.contains(r#"aria-label="Unknown user">?</span>"#));
    }

    #[test]
    fn host_avatar_markup_is_embedded() {
        let env = Environment::builder()
            .users(users())
            .avatars(AvatarTemplate::new("https://img.example/{id}?s={size}"))
            .build();
        let markup = Avatar::new(&env, 7).size(48).render();
        assert!(markup.starts_with(r#"<span class="user-avatar" style="width: 48px; height: 48px"><img"#));
        assert!(markup.contains(r#"src="https://img.example/7?s=48""#));
        assert!(!markup.contains("placeholder"));
    }

    #[test]
    fn user_card_lists_email_and_roles() {
        let env = Environment::builder().users(users()).build();
        let markup = UserCard::new(&env, 7).render();
        assert!(markup.starts_with(r#"<div class="user-card"><span class="user-avatar"#));
        assert!(markup.contains(r#"<strong class="user-card-name">Ada Lovelace</strong>"#));
        assert!(markup.contains(r#"<a href="mailto:ada@example.com" class="user-card-email">ada@example.com</a>"#));
        assert!(markup.contains(r#"<span class="user-card-roles">Administrator, Shop Manager</span>"#));
    }

    #[test]
    fn current_user_is_the_default() {
        let env = Environment::builder().users(users().logged_in_as(7)).build();
        assert!(Avatar::current(&env).render().contains(r#"aria-label="Ada Lovelace">AL</span>"#));
        assert!(UserCard::current(&env).render().contains("Ada Lovelace</strong>"));

        let anonymous = Environment::builder().users(users()).build();
        assert!(UserCard::current(&anonymous).render().contains("user-card--unknown"));
    }

    #[test]
    fn placeholders_and_roles_are_translated() {
        let env = Environment::builder().users(users()).translator(Shouting).build();
        let markup = UserCard::new(&env, 7).render();
        assert!(markup.contains(r#"<span class="user-card-roles">ADMINISTRATOR, SHOP MANAGER</span>"#));
        assert!(markup.contains("Ada Lovelace</strong>"));

        let missing = UserCard::new(&env, 99).render();
        assert!(missing.contains(r#"aria-label="UNKNOWN USER">?</span>"#));
        assert!(missing.contains("UNKNOWN USER</strong>"));
    }

    #[test]
    fn user_card_for_missing_user() {
        let env = Environment::new();
        let markup = UserCard::new(&env, 1).hide_email().hide_roles().render();
        assert!(markup.starts_with(r#"<div class="user-card user-card--unknown">"#));
        assert!(markup.contains("Unknown user</strong>"));
    }
}
