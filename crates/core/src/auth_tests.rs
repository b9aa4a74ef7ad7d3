// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::StaticAuthz;

#[test]
fn anonymous_viewer_has_empty_user_id() {
    let viewer = Viewer::anonymous();
    assert!(viewer.is_anonymous());
    assert!(!Viewer::new("u-1").is_anonymous());
}

#[test]
fn not_site_admin_is_distinguishable_from_backend_failure() {
    let denied = AuthzError::NotSiteAdmin;
    let broken = AuthzError::Backend("session store unreachable".to_string());
    assert_ne!(denied, broken);
    assert_eq!(denied.to_string(), "must be site admin");
}

#[tokio::test]
async fn static_authz_variants() {
    let viewer = Viewer::new("u-1");
    assert!(StaticAuthz::Admin.ensure_site_admin(&viewer).await.is_ok());
    assert_eq!(
        StaticAuthz::NotAdmin.ensure_site_admin(&viewer).await,
        Err(AuthzError::NotSiteAdmin)
    );
    assert!(matches!(
        StaticAuthz::Broken("down".to_string())
            .ensure_site_admin(&viewer)
            .await,
        Err(AuthzError::Backend(_))
    ));
}
