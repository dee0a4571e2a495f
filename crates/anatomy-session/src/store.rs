//! The session store: the single owner of the signed-in identity.
//!
//! State lives in memory and is mirrored to a [`SessionBackend`] on every
//! change. Public operations never return errors for persistence problems;
//! they log at `warn` and carry on, so the presentation layer only has to
//! handle input validation.

use std::sync::Arc;

use anatomy_core::entities::{Identity, Subscription};
use anatomy_core::enums::SubscriptionStatus;
use anatomy_core::subscription::{self, SubscriptionDisplay};
use anatomy_core::validation::{LoginForm, ProfileForm, SignupForm};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::accounts::{DemoAccount, synthesize_identity};
use crate::backend::{PersistedSession, SessionBackend, SessionState};
use crate::clock::{Clock, SystemClock};
use crate::error::SessionError;
use crate::navigation::{LogNavigator, Navigator};
use crate::settings::SessionSettings;

const LOGIN_REJECTED: &str = "Invalid credentials. Please try again.";
const SIGNUP_REJECTED: &str = "Failed to create account. Please try again.";

/// Owned read model of the store for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub identity: Option<Identity>,
    pub is_admin: bool,
    pub is_subscribed: bool,
    pub is_trial_active: bool,
    pub trial_days_remaining: u32,
    pub subscription: Option<SubscriptionDisplay>,
    pub backend: &'static str,
}

pub struct SessionStore<B: SessionBackend> {
    backend: B,
    settings: SessionSettings,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
    state: SessionState,
    loading: bool,
}

impl<B: SessionBackend> std::fmt::Debug for SessionStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("backend", &self.backend.kind())
            .field("state", &self.state)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl<B: SessionBackend> SessionStore<B> {
    /// A store with the wall clock and a logging navigator. Loading until
    /// [`Self::initialize`] runs.
    pub fn new(backend: B, settings: SessionSettings) -> Self {
        Self {
            backend,
            settings,
            clock: Arc::new(SystemClock),
            navigator: Arc::new(LogNavigator),
            state: SessionState::default(),
            loading: true,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Load the persisted snapshot and correct an expired subscription's
    /// status. Failures are logged; the in-memory state is then left as is.
    pub fn initialize(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(%error, backend = self.backend.kind(), "failed to restore session");
        }
        self.loading = false;
    }

    fn restore(&mut self) -> Result<(), SessionError> {
        let Some(snapshot) = self.backend.load()? else {
            tracing::debug!("no stored session");
            self.state = SessionState::default();
            return Ok(());
        };

        let mut state = snapshot.state;
        let now = self.clock.now();
        let mut corrected = false;
        if let Some(sub) = state
            .identity
            .as_mut()
            .and_then(|identity| identity.subscription.as_mut())
            && sub.needs_expiry_correction(now)
        {
            tracing::debug!(
                subscription = %sub.id,
                from = %sub.status,
                expires_at = %sub.expires_at,
                "subscription expired; marking inactive"
            );
            sub.status = SubscriptionStatus::Inactive;
            corrected = true;
        }
        state.is_admin = state.identity.as_ref().is_some_and(Identity::is_admin);

        if corrected {
            self.backend.save(&PersistedSession::new(state.clone()))?;
        }
        self.state = state;
        tracing::debug!(
            authenticated = self.state.identity.is_some(),
            is_admin = self.state.is_admin,
            "session restored"
        );
        Ok(())
    }

    /// Demo sign-in. The password is accepted but not checked; the email
    /// picks the account kind.
    ///
    /// Returns `false` only when the new identity cannot be created or
    /// persisted, in which case the previous state is kept.
    pub async fn login(&mut self, email: &str, _password: &str) -> bool {
        let ok = self.sign_in(email, None).await;
        if ok {
            self.navigator.navigate(&self.settings.home_route);
        }
        ok
    }

    /// Validate the login form, then [`Self::login`].
    ///
    /// # Errors
    ///
    /// `SessionError::Core` for a missing field, `SessionError::Rejected` when
    /// the sign-in itself fails.
    pub async fn login_with_form(&mut self, form: &LoginForm) -> Result<(), SessionError> {
        form.validate()?;
        if self.login(&form.email, &form.password).await {
            Ok(())
        } else {
            Err(SessionError::Rejected(LOGIN_REJECTED))
        }
    }

    /// One-click demo login, landing on the account's home route.
    pub async fn login_as(&mut self, account: DemoAccount) -> bool {
        let email = account.email(&self.settings).to_string();
        let ok = self.sign_in(&email, None).await;
        if ok {
            self.navigator
                .navigate(account.landing_route(&self.settings));
        }
        ok
    }

    /// Validate the signup form and sign in as the new address. The chosen
    /// name replaces the one derived from the email.
    ///
    /// # Errors
    ///
    /// `SessionError::Core` on a validation failure, `SessionError::Rejected`
    /// when the sign-in fails.
    pub async fn signup(&mut self, form: &SignupForm) -> Result<(), SessionError> {
        form.validate()?;
        if !self.sign_in(&form.email, Some(&form.name)).await {
            return Err(SessionError::Rejected(SIGNUP_REJECTED));
        }
        self.navigator.navigate(&self.settings.home_route);
        Ok(())
    }

    async fn sign_in(&mut self, email: &str, name: Option<&str>) -> bool {
        self.loading = true;
        if !self.settings.login_delay.is_zero() {
            tokio::time::sleep(self.settings.login_delay).await;
        }

        let result = self.replace_identity(email, name);
        self.loading = false;
        match result {
            Ok(()) => {
                tracing::info!(
                    email,
                    role = %self.state.identity.as_ref().map_or("none", |i| i.role.as_str()),
                    "signed in"
                );
                true
            }
            Err(error) => {
                tracing::warn!(%error, email, "sign-in failed");
                false
            }
        }
    }

    fn replace_identity(&mut self, email: &str, name: Option<&str>) -> Result<(), SessionError> {
        let mut identity = synthesize_identity(email, self.clock.now(), &self.settings)?;
        if let Some(name) = name {
            identity.name = name.to_string();
        }
        let state = SessionState {
            is_admin: identity.is_admin(),
            identity: Some(identity),
        };
        self.backend.save(&PersistedSession::new(state.clone()))?;
        self.state = state;
        Ok(())
    }

    /// Forget the identity locally and in storage, then go to the login page.
    pub fn logout(&mut self) {
        let email = self.state.identity.take().map(|i| i.email);
        self.state.is_admin = false;
        if let Err(error) = self.backend.clear() {
            tracing::warn!(%error, "failed to clear stored session");
        }
        tracing::info!(email = email.as_deref().unwrap_or(""), "signed out");
        self.navigator.navigate(&self.settings.login_route);
    }

    /// Replace the identity wholesale and persist.
    pub fn update_user(&mut self, identity: Identity) {
        self.state.is_admin = identity.is_admin();
        self.state.identity = Some(identity);
        tracing::debug!(is_admin = self.state.is_admin, "identity updated");
        self.persist();
    }

    /// Replace the current identity's subscription. No-op when signed out.
    pub fn update_subscription(&mut self, subscription: Subscription) {
        let Some(identity) = self.state.identity.as_mut() else {
            tracing::debug!("no identity; subscription update ignored");
            return;
        };
        tracing::debug!(
            status = %subscription.status,
            plan = %subscription.plan,
            "subscription updated"
        );
        identity.subscription = Some(subscription);
        self.persist();
    }

    /// Validate and merge profile edits into the current identity.
    ///
    /// # Errors
    ///
    /// `SessionError::NotAuthenticated` when signed out, `SessionError::Core`
    /// when the form does not validate.
    pub fn update_profile(&mut self, form: &ProfileForm) -> Result<(), SessionError> {
        let Some(current) = self.state.identity.as_ref() else {
            return Err(SessionError::NotAuthenticated);
        };
        form.validate()?;

        let mut updated = current.clone();
        updated.name.clone_from(&form.name);
        updated.email.clone_from(&form.email);
        if let Some(bio) = &form.bio {
            updated.bio.clone_from(bio);
        }
        updated.updated_at = self.clock.now();
        self.update_user(updated);
        Ok(())
    }

    fn persist(&self) {
        if let Err(error) = self.backend.save(&PersistedSession::new(self.state.clone())) {
            tracing::warn!(%error, "failed to persist session");
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.state.is_admin
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    fn subscription(&self) -> Option<&Subscription> {
        self.state
            .identity
            .as_ref()
            .and_then(|identity| identity.subscription.as_ref())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        subscription::is_subscribed(self.subscription(), self.now())
    }

    #[must_use]
    pub fn is_trial_active(&self) -> bool {
        subscription::is_trial_active(self.subscription(), self.now())
    }

    #[must_use]
    pub fn trial_days_remaining(&self) -> u32 {
        subscription::trial_days_remaining(self.subscription(), self.now())
    }

    /// Display form of the current subscription; `None` when signed out.
    #[must_use]
    pub fn safe_subscription(&self) -> Option<SubscriptionDisplay> {
        self.state.identity.as_ref().map(subscription::safe_subscription)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionView {
        SessionView {
            authenticated: self.state.identity.is_some(),
            identity: self.state.identity.clone(),
            is_admin: self.state.is_admin,
            is_subscribed: self.is_subscribed(),
            is_trial_active: self.is_trial_active(),
            trial_days_remaining: self.trial_days_remaining(),
            subscription: self.safe_subscription(),
            backend: self.backend.kind(),
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}
