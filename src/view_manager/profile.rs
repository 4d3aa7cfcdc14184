//! Applying profiles and color schemes to displays.

use super::ViewManager;
use crate::events::ViewEvent;
use crate::types::{DisplayId, SessionId};
use term_views_config::{ColorScheme, Profile};

impl ViewManager {
    /// Color scheme named by a profile, or the default scheme
    pub fn color_scheme_for_profile(&self, profile: &Profile) -> ColorScheme {
        self.services
            .color_schemes
            .read()
            .scheme_or_default(&profile.color_scheme)
            .clone()
    }

    pub fn profile_has_blur_enabled(&self, profile: &Profile) -> bool {
        self.color_scheme_for_profile(profile).blur
    }

    /// Apply a profile's visual and behavioral options to a display
    ///
    /// Emits `UpdateWindowIcon` and `BlurSettingChanged`. Returns false for
    /// an unknown display.
    pub fn apply_profile_to_view(&mut self, display: DisplayId, profile: &Profile) -> bool {
        if !self.displays.contains_key(&display) {
            return false;
        }
        self.emit(ViewEvent::UpdateWindowIcon);

        let scheme = self.color_scheme_for_profile(profile);
        if let Some(view) = self.displays.get_mut(&display) {
            view.apply(profile, &scheme);
        }
        crate::debug_trace!(
            "PROFILE",
            "Applied profile '{}' (scheme '{}') to display {}",
            profile.name,
            scheme.name,
            display
        );

        self.emit(ViewEvent::BlurSettingChanged(scheme.blur));
        true
    }

    /// Re-apply the session's profile to every display showing it
    pub fn update_views_for_session(&mut self, session: SessionId) -> usize {
        let profile = {
            let profiles = self.services.profiles.read();
            let sessions = self.services.sessions.lock();
            sessions.session_profile(session, &profiles).clone()
        };
        let displays: Vec<DisplayId> = self
            .session_map
            .iter()
            .filter(|(_, s)| **s == session)
            .map(|(d, _)| *d)
            .collect();
        for display in &displays {
            self.apply_profile_to_view(*display, &profile);
        }
        displays.len()
    }

    /// Re-apply a changed profile to every display whose session uses it
    pub fn profile_changed(&mut self, profile: &Profile) -> usize {
        let displays: Vec<DisplayId> = {
            let profiles = self.services.profiles.read();
            let sessions = self.services.sessions.lock();
            self.session_map
                .iter()
                .filter(|(_, s)| sessions.session_profile(**s, &profiles).id == profile.id)
                .map(|(d, _)| *d)
                .collect()
        };
        for display in &displays {
            self.apply_profile_to_view(*display, profile);
        }
        log::debug!(
            "Profile '{}' re-applied to {} displays in window {}",
            profile.name,
            displays.len(),
            self.id
        );
        displays.len()
    }
}
