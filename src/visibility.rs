use crate::models::{Post, PostAudience, Role, User};

// --- Navigation Table ---

/// NavItem
///
/// One entry of the fixed navigation table, with the closed set of roles
/// allowed to see it. Labels are the Russian-language strings the front end
/// renders; the `href` is the stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub roles: &'static [Role],
}

/// The complete navigation table. Fixed at compile time:
/// Home and Profile for everyone authenticated, the user listing for
/// Admin/Manager, role management for Admin only.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Главная",
        href: "/",
        roles: &[Role::Admin, Role::Manager, Role::User],
    },
    NavItem {
        label: "Личный кабинет",
        href: "/profile",
        roles: &[Role::Admin, Role::Manager, Role::User],
    },
    NavItem {
        label: "Пользователи",
        href: "/users",
        roles: &[Role::Admin, Role::Manager],
    },
    NavItem {
        label: "Роли",
        href: "/roles",
        roles: &[Role::Admin],
    },
];

// --- Pure Visibility Predicates ---
//
// These functions are deliberately side-effect free and take the current user
// as an explicit `Option<&User>`: the absent (Anonymous) case must be handled
// at every call site, and the answer is recomputed from the live user record,
// never cached.

/// A navigation item is shown iff someone is logged in and the item's
/// allowed-roles set contains their role. Anonymous sessions see no navigation.
pub fn is_nav_item_visible(item: &NavItem, user: Option<&User>) -> bool {
    user.is_some_and(|u| item.roles.contains(&u.role))
}

/// The navigation as the given user sees it, preserving table order.
pub fn visible_nav_items(user: Option<&User>) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| is_nav_item_visible(item, user))
        .collect()
}

/// is_post_visible
///
/// Anonymous viewers see nothing. Admin and Manager see every post regardless
/// of department. A User-role viewer sees a post iff it targets "all" or their
/// own department, read live from the current user record (a User-role account
/// that somehow lacks a department sees only "all" posts).
pub fn is_post_visible(post: &Post, user: Option<&User>) -> bool {
    let Some(user) = user else {
        return false;
    };
    match user.role {
        Role::Admin | Role::Manager => true,
        Role::User => match post.department {
            PostAudience::All => true,
            PostAudience::Department(dept) => user.department == Some(dept),
        },
    }
}

/// Only authenticated Admin and Manager accounts may publish posts.
pub fn can_create_post(user: Option<&User>) -> bool {
    user.is_some_and(|u| matches!(u.role, Role::Admin | Role::Manager))
}

/// Applies `is_post_visible` across a post sequence, preserving order.
pub fn filter_visible_posts(posts: Vec<Post>, user: Option<&User>) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| is_post_visible(post, user))
        .collect()
}
