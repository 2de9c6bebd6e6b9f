use crate::config::ZoneConfig;
use crate::control::{SessionEvent, SessionResponse, SessionState};
use crate::cross_section::CrossSection;
use crate::error::TideZoneError;
use crate::geodesic::GeodesicSolver;
use crate::render::LinePrimitives;
use crate::zone::ZoneCollection;
use tidezone_types::cartesian::Point2d;
use tidezone_types::geo::{Crs, GeoPoint2d};

/// Two-click baseline entry with undo of the preview perpendiculars.
///
/// The session owns the chart CRS, so the definition is resolved once per chart. Clicks are converted into
/// geographic stations immediately and all the geodesic work is done in geographic coordinates.
///
/// Undo removes the most recent perpendicular from the preview and regenerates the zone collection from the
/// remaining cross-sections, so the zones never disagree with what is drawn.
#[derive(Debug)]
pub struct InputSession {
    crs: Crs,
    config: ZoneConfig,
    solver: GeodesicSolver,
    state: SessionState,
    first_station: Option<GeoPoint2d>,
    sections: Vec<CrossSection>,
    lines: LinePrimitives,
    zones: Option<ZoneCollection>,
}

impl InputSession {
    /// Creates a session for a chart in the given CRS.
    pub fn new(crs: Crs, config: ZoneConfig) -> Self {
        Self {
            crs,
            config,
            solver: GeodesicSolver::wgs84(),
            state: SessionState::AwaitingFirstClick,
            first_station: None,
            sections: Vec::new(),
            lines: LinePrimitives::default(),
            zones: None,
        }
    }

    /// Creates a session resolving the CRS from its definition.
    pub fn from_crs_definition(definition: &str, config: ZoneConfig) -> Result<Self, TideZoneError> {
        Ok(Self::new(Crs::from_definition(definition)?, config))
    }

    /// Handles an input event.
    pub fn handle(&mut self, event: SessionEvent) -> Result<SessionResponse, TideZoneError> {
        match event {
            SessionEvent::PointSelected(point) => self.select_point(point),
            SessionEvent::Undo => Ok(self.undo()),
        }
    }

    /// Records a click on the chart.
    ///
    /// The second click completes the baseline. A click after a completed baseline starts a new one, the previous
    /// preview stays visible until the new baseline is completed.
    ///
    /// If the baseline cannot be processed, the error is returned and the session goes back to
    /// [`SessionState::AwaitingFirstClick`].
    pub fn select_point(&mut self, point: Point2d) -> Result<SessionResponse, TideZoneError> {
        let station = match self.crs.to_geographic(&point) {
            Some(station) => station,
            None => {
                log::warn!("Selected point {point:?} cannot be converted into geographic coordinates");
                if self.state == SessionState::AwaitingSecondClick {
                    self.reset_buffer();
                }
                return Err(TideZoneError::ProjectionFailed(format!("{point:?}")));
            }
        };

        match (self.state, self.first_station) {
            (SessionState::AwaitingSecondClick, Some(first)) => {
                self.reset_buffer();
                self.complete_baseline(first, station)
            }
            _ => {
                self.first_station = Some(station);
                self.state = SessionState::AwaitingSecondClick;
                log::debug!("First station selected: {station:?}");
                Ok(SessionResponse::FirstStationSelected(station))
            }
        }
    }

    /// Runs the pipeline for two typed-in stations, skipping the click buffer.
    pub fn enter_stations(
        &mut self,
        station_a: GeoPoint2d,
        station_b: GeoPoint2d,
    ) -> Result<SessionResponse, TideZoneError> {
        self.reset_buffer();
        self.complete_baseline(station_a, station_b)
    }

    /// Removes the most recent perpendicular of the preview.
    ///
    /// The zone collection is regenerated from the remaining cross-sections, so it loses its last zone. When the
    /// last perpendicular of a completed baseline is removed, the session waits for a new first click.
    pub fn undo(&mut self) -> SessionResponse {
        if self.lines.perpendiculars.pop().is_none() {
            return SessionResponse::NothingToUndo;
        }
        self.sections.pop();

        if let Some(zones) = self.zones.take() {
            self.zones = Some(ZoneCollection::from_cross_sections(
                *zones.baseline(),
                *zones.config(),
                &self.sections,
            ));
        }

        let remaining = self.lines.perpendiculars.len();
        if remaining == 0 && self.state == SessionState::LineComplete {
            self.state = SessionState::AwaitingFirstClick;
        }

        log::info!("Removed last perpendicular, {remaining} left");
        SessionResponse::PerpendicularRemoved { remaining }
    }

    /// Clears the click buffer and the preview.
    pub fn reset(&mut self) {
        self.reset_buffer();
        self.sections.clear();
        self.lines = LinePrimitives::default();
        self.zones = None;
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Chart CRS.
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Configuration used for the next baseline.
    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Replaces the configuration used for the next baseline. Already generated zones are not changed.
    pub fn set_config(&mut self, config: ZoneConfig) -> Result<(), TideZoneError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Station recorded by the first click, if the session waits for the second one.
    pub fn first_station(&self) -> Option<GeoPoint2d> {
        self.first_station
    }

    /// Lines currently shown on the chart.
    pub fn lines(&self) -> &LinePrimitives {
        &self.lines
    }

    /// Cross-sections of the preview.
    pub fn cross_sections(&self) -> &[CrossSection] {
        &self.sections
    }

    /// Zones of the last completed baseline.
    pub fn zones(&self) -> Option<&ZoneCollection> {
        self.zones.as_ref()
    }

    fn reset_buffer(&mut self) {
        self.first_station = None;
        self.state = SessionState::AwaitingFirstClick;
    }

    fn complete_baseline(
        &mut self,
        station_a: GeoPoint2d,
        station_b: GeoPoint2d,
    ) -> Result<SessionResponse, TideZoneError> {
        let result = ZoneCollection::generate(&self.solver, self.config, station_a, station_b).and_then(
            |(zones, sections)| {
                let lines = LinePrimitives::project(&self.crs, zones.baseline(), &sections)?;
                Ok((zones, sections, lines))
            },
        );

        let (zones, sections, lines) = match result {
            Ok(generated) => generated,
            Err(err) => {
                log::warn!("Baseline rejected: {err}");
                return Err(err);
            }
        };

        self.sections = sections;
        self.lines = lines.clone();
        self.zones = Some(zones.clone());
        self.state = SessionState::LineComplete;

        Ok(SessionResponse::LineCompleted { lines, zones })
    }
}
