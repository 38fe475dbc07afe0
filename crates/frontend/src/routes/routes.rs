use crate::domain::a001_camera::ui::details::CameraDetails;
use crate::domain::a001_camera::ui::list::CameraList;
use crate::domain::a002_part::ui::list::PartList;
use crate::domain::a003_location::ui::list::LocationList;
use crate::domain::a004_part_detection::ui::details::PartIdentification;
use crate::layout::{Home, NotFound, Shell};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/cameras") view=CameraList />
                    // `/cameras/detail?name=..&isDemo=..` after configuring a project
                    <Route path=path!("/cameras/:name") view=CameraDetails />
                    <Route path=path!("/parts") view=PartList />
                    <Route path=path!("/locations") view=LocationList />
                    <Route path=path!("/part_identification") view=PartIdentification />
                </Routes>
            </Shell>
        </Router>
    }
}
