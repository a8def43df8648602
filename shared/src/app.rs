use tracing::{debug, info, warn};

use crate::capabilities::{into_success, ApiBase, Capabilities};
use crate::config::ScreenConfig;
use crate::dto::{ProfileDto, ProfileResponse};
use crate::error::SyncError;
use crate::event::Event;
use crate::model::{Alert, Model, SyncPhase};
use crate::validate::{validate, ValidatedProfile};
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn begin_load(
        config: &ScreenConfig,
        model: &mut Model,
        caps: &Capabilities,
    ) -> Result<(), SyncError> {
        let base = ApiBase::try_from(config)?;
        debug!(base = base.as_str(), "API base configured");
        let url = base.profile_url()?;

        model.api_base = Some(base);
        model.phase = SyncPhase::Loading;

        info!(url = %url, "loading profile");
        caps.http
            .get(url.as_str())
            .expect_json::<ProfileResponse>()
            .send(Event::ProfileLoaded);
        Ok(())
    }

    fn finish_load(
        result: crux_http::Result<crux_http::Response<ProfileResponse>>,
        model: &mut Model,
    ) {
        model.phase = SyncPhase::Idle;

        let profile = into_success(result)
            .and_then(|mut response| response.take_body().ok_or(SyncError::EmptyBody));

        match profile {
            Ok(profile) => {
                model.form.apply_response(&profile);
                info!("profile loaded");
            }
            Err(e) => {
                warn!(error = %e, "profile load failed");
                model.show_alert(Alert::load_failed());
            }
        }
    }

    fn begin_submit(
        profile: ValidatedProfile,
        model: &mut Model,
        caps: &Capabilities,
    ) -> Result<(), SyncError> {
        let url = model
            .api_base
            .as_ref()
            .ok_or(SyncError::NotConfigured)?
            .profile_url()?;
        let body = serde_json::to_vec(&ProfileDto::from(profile))?;

        model.is_loading = true;
        model.phase = SyncPhase::Submitting;

        info!(url = %url, "submitting profile update");
        caps.http
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .body_bytes(body)
            .send(Event::ProfileSaved);
        Ok(())
    }

    fn finish_submit(
        result: crux_http::Result<crux_http::Response<Vec<u8>>>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        match into_success(result) {
            Ok(_) => {
                // Terminal: the screen unmounts, so the loading flag stays as is.
                model.phase = SyncPhase::NavigatedAway;
                info!("profile updated, navigating back");
                caps.navigator.go_back();
            }
            Err(e) => {
                warn!(error = %e, "profile update failed");
                model.is_loading = false;
                model.phase = SyncPhase::Idle;
                model.show_alert(Alert::submit_failed());
                caps.render.render();
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();

        if model.phase.is_terminal() {
            debug!(event = event_name, phase = ?model.phase, "screen closed, dropping event");
            return;
        }

        if event.is_user_initiated() {
            debug!(event = event_name, "user action");
        }

        match event {
            Event::Activated(config) => {
                if model.activated {
                    debug!("already activated, ignoring");
                    return;
                }
                model.activated = true;

                if let Err(e) = Self::begin_load(&config, model, caps) {
                    warn!(error = %e, "cannot load profile");
                    model.show_alert(Alert::load_failed());
                }
                caps.render.render();
            }

            Event::Dismissed => {
                // In-flight requests cannot be recalled from the shell; their
                // responses are dropped by the terminal-phase guard above.
                info!(phase = ?model.phase, "screen dismissed");
                model.phase = SyncPhase::Dismissed;
            }

            Event::NicknameChanged(value) => {
                model.form.nickname = value;
                caps.render.render();
            }

            Event::HeightChanged(value) => {
                model.form.height = value;
                caps.render.render();
            }

            Event::WeightChanged(value) => {
                model.form.weight = value;
                caps.render.render();
            }

            Event::GenderSelected(value) => {
                model.form.gender = value;
                caps.render.render();
            }

            Event::ActiveLevelSelected(value) => {
                model.form.active_level = value;
                caps.render.render();
            }

            Event::BirthdayPickerOpened => {
                model.is_date_picker_visible = true;
                caps.render.render();
            }

            Event::BirthdayPickerCancelled => {
                model.is_date_picker_visible = false;
                caps.render.render();
            }

            Event::BirthdayConfirmed(date) => {
                model.form.birthday = date;
                model.is_date_picker_visible = false;
                caps.render.render();
            }

            Event::UpdatePressed => {
                if model.phase == SyncPhase::Submitting {
                    debug!("update already in flight, ignoring");
                    return;
                }

                match validate(&model.form) {
                    Ok(profile) => {
                        if let Err(e) = Self::begin_submit(profile, model, caps) {
                            warn!(error = %e, "cannot submit profile");
                            model.show_alert(Alert::submit_failed());
                        }
                    }
                    Err(e) => {
                        info!(reason = e.code(), "profile form rejected");
                        model.show_alert(Alert::from(e));
                    }
                }
                caps.render.render();
            }

            Event::AlertDismissed => {
                model.clear_alert();
                caps.render.render();
            }

            Event::ProfileLoaded(result) => {
                if model.phase != SyncPhase::Loading {
                    // A submit started during the load supersedes the server copy.
                    debug!(phase = ?model.phase, "stale profile response, ignoring");
                    return;
                }
                Self::finish_load(result, model);
                caps.render.render();
            }

            Event::ProfileSaved(result) => {
                if model.phase != SyncPhase::Submitting {
                    warn!(phase = ?model.phase, "unexpected update response, ignoring");
                    return;
                }
                Self::finish_submit(result, model, caps);
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
