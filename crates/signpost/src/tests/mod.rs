mod schedule;

pub(crate) const FIXTURE_PAGE: &str = include_str!("../../../../fixtures/decision-tree.html");

pub(crate) fn controller() -> crate::DecisionTreeController {
    crate::DecisionTreeController::from_markup(
        FIXTURE_PAGE,
        crate::ParseOptions::strict(),
        crate::ControllerConfig::default(),
    )
    .unwrap()
}
