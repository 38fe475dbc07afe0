//! ViewModel for the Part Identification page
//!
//! Three remote selections (camera, parts, location) share one demo flag.
//! Once none of them is loading, the project of the current mode is fetched;
//! outside demo mode its stored camera, location and parts are then selected.

use super::model;
use contracts::domain::a001_camera::aggregate::Camera;
use contracts::domain::a002_part::aggregate::Part;
use contracts::domain::a003_location::aggregate::Location;
use contracts::domain::a004_part_detection::aggregate::{
    DetectionSettings, PartDetection, PartDetectionDto, MIN_MAX_IMAGES,
};
use contracts::shared::remote_selection::{ResourceKind, SelectionMode};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::remote_selection::{use_remote_selection, RemoteSelection};

#[derive(Clone, Copy)]
pub struct PartIdentificationVm {
    /// "Demo Pretrained Detection" mode
    pub is_test_model: RwSignal<bool>,

    pub cameras: RemoteSelection<Camera>,
    pub parts: RemoteSelection<Part>,
    pub locations: RemoteSelection<Location>,

    pub project: RwSignal<Option<PartDetection>>,
    pub settings: RwSignal<DetectionSettings>,

    // === UI State ===
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub configure_error: RwSignal<Option<String>>,
    pub show_demo_warning: RwSignal<bool>,
}

impl PartIdentificationVm {
    pub fn new() -> Self {
        let is_test_model = RwSignal::new(false);
        let is_demo = Signal::derive(move || is_test_model.get());

        Self {
            is_test_model,
            cameras: use_remote_selection(ResourceKind::Cameras, is_demo, SelectionMode::Single),
            parts: use_remote_selection(ResourceKind::Parts, is_demo, SelectionMode::Multiple),
            locations: use_remote_selection(
                ResourceKind::Locations,
                is_demo,
                SelectionMode::Single,
            ),
            project: RwSignal::new(None),
            settings: RwSignal::new(DetectionSettings::default()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            configure_error: RwSignal::new(None),
            show_demo_warning: RwSignal::new(false),
        }
    }

    /// Register the effects that tie the project to the selections.
    pub fn init(&self) {
        let vm = *self;

        let selections_ready = Memo::new(move |_| {
            !vm.cameras.is_loading() && !vm.parts.is_loading() && !vm.locations.is_loading()
        });

        Effect::new(move |_| {
            let is_demo = vm.is_test_model.get();
            if selections_ready.get() {
                vm.load_project(is_demo);
            }
        });

        Effect::new(move |_| {
            if vm.is_test_model.get() {
                return;
            }
            let Some(project) = vm.project.get() else {
                return;
            };
            if let Some(location) = project.location {
                vm.locations.select_by_id(location);
            }
            if !project.parts.is_empty() {
                vm.parts.select_by_id(project.parts);
            }
            if let Some(camera) = project.camera {
                vm.cameras.select_by_id(camera);
            }
        });
    }

    fn load_project(&self, is_demo: bool) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            let result = model::fetch_project(is_demo).await;
            if vm.is_test_model.get_untracked() != is_demo {
                // mode switched while the request was in flight
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(Some(project)) => {
                    vm.settings.set(project.settings.clone());
                    vm.project.set(Some(project));
                    vm.load_error.set(None);
                }
                Ok(None) => {
                    vm.project.set(None);
                    vm.load_error.set(Some(missing_project_message(is_demo)));
                }
                Err(e) => {
                    log::error!("Failed to load part detection project: {}", e);
                    vm.load_error.set(Some(e));
                }
            }
        });
    }

    // === Derived ===

    pub fn accuracy_range_disabled(&self) -> bool {
        !self.settings.with(|s| s.need_retraining) || self.is_test_model.get()
    }

    pub fn message_to_cloud_disabled(&self) -> bool {
        !self.settings.with(|s| s.send_message_to_cloud) || self.is_test_model.get()
    }

    pub fn max_images_error(&self) -> Option<String> {
        self.settings.with(|s| max_images_error(s.max_images))
    }

    pub fn configure_disabled(&self) -> bool {
        let incomplete = self.cameras.selected().is_none()
            || self.locations.selected().is_none()
            || self.parts.selection().is_empty();
        (incomplete || self.loading.get()) && !self.is_test_model.get()
    }

    // === Commands ===

    pub fn set_need_retraining(&self, value: bool) {
        self.settings.update(|s| s.need_retraining = value);
    }

    pub fn set_send_message_to_cloud(&self, value: bool) {
        self.settings.update(|s| s.send_message_to_cloud = value);
    }

    /// Update one numeric setting from raw input; unparsable input is ignored.
    pub fn set_number(&self, field: fn(&mut DetectionSettings) -> &mut i32, raw: String) {
        if let Some(value) = parse_number(&raw) {
            self.settings.update(|s| *field(s) = value);
        }
    }

    pub fn enter_demo(&self) {
        self.show_demo_warning.set(false);
        self.is_test_model.set(true);
    }

    pub fn leave_demo(&self) {
        self.is_test_model.set(false);
    }

    /// Сохранить проект, пометить его сконфигурированным и перейти к камере
    ///
    /// The demo project is preconfigured: in demo mode nothing is saved.
    pub fn configure(&self, navigate: impl Fn(&str) + 'static) {
        let vm = *self;
        let Some(project_id) = vm.project.with_untracked(|p| p.as_ref().map(|p| p.id)) else {
            vm.configure_error
                .set(Some("Project is not loaded yet".to_string()));
            return;
        };

        let is_demo = vm.is_test_model.get_untracked();
        let camera = vm.cameras.selection_untracked().single().cloned();
        let location = vm.locations.selection_untracked().single().cloned();
        let parts = vm.parts.selection_untracked();
        let dto = build_dto(
            camera.as_ref(),
            location.as_ref(),
            parts.as_slice(),
            vm.settings.get_untracked(),
        );
        let camera_name = camera.map(|c| c.name).unwrap_or_default();

        vm.loading.set(true);
        spawn_local(async move {
            let result = async {
                if !is_demo {
                    model::save_project(project_id, &dto).await?;
                }
                model::configure(project_id).await
            }
            .await;
            vm.loading.set(false);

            match result {
                Ok(_) => {
                    vm.configure_error.set(None);
                    navigate(&camera_detail_href(&camera_name, is_demo));
                }
                Err(e) => {
                    log::error!("Failed to configure project {}: {}", project_id, e);
                    vm.configure_error.set(Some(e));
                }
            }
        });
    }
}

impl Default for PartIdentificationVm {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_project_message(is_demo: bool) -> String {
    if is_demo {
        "Demo project not found".to_string()
    } else {
        "Project not found".to_string()
    }
}

fn max_images_error(max_images: i32) -> Option<String> {
    (max_images < MIN_MAX_IMAGES).then(|| format!("Cannot be less than {}", MIN_MAX_IMAGES))
}

fn parse_number(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn build_dto(
    camera: Option<&Camera>,
    location: Option<&Location>,
    parts: &[Part],
    settings: DetectionSettings,
) -> PartDetectionDto {
    PartDetectionDto {
        camera: camera.map(|c| c.id),
        location: location.map(|l| l.id),
        parts: parts.iter().map(|p| p.id).collect(),
        settings,
    }
}

fn camera_detail_href(camera_name: &str, is_demo: bool) -> String {
    format!(
        "/cameras/detail?name={}&isDemo={}",
        urlencoding::encode(camera_name),
        is_demo
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_camera::aggregate::CameraDto;
    use contracts::domain::a002_part::aggregate::PartDto;

    #[test]
    fn test_max_images_error() {
        assert_eq!(max_images_error(14).as_deref(), Some("Cannot be less than 15"));
        assert_eq!(max_images_error(15), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("4.5"), None);
    }

    #[test]
    fn test_build_dto_keeps_selection_order() {
        let camera = Camera::from_dto(
            7,
            CameraDto {
                name: "Line 1".into(),
                rtsp: "rtsp://line1".into(),
                ..Default::default()
            },
        );
        let parts = vec![
            Part::from_dto(3, PartDto { name: "Bolt".into(), ..Default::default() }),
            Part::from_dto(1, PartDto { name: "Nut".into(), ..Default::default() }),
        ];

        let dto = build_dto(Some(&camera), None, &parts, DetectionSettings::default());
        assert_eq!(dto.camera, Some(7));
        assert_eq!(dto.location, None);
        assert_eq!(dto.parts, vec![3, 1]);
        assert_eq!(dto.settings, DetectionSettings::default());
    }

    #[test]
    fn test_camera_detail_href() {
        assert_eq!(
            camera_detail_href("Demo Video", true),
            "/cameras/detail?name=Demo%20Video&isDemo=true"
        );
        assert_eq!(camera_detail_href("", false), "/cameras/detail?name=&isDemo=false");
    }
}
