/// Core trait for day-stepped storage models.
///
/// Defines the interface a model implements: initialize state, step one day,
/// and run over a daily inflow series.
pub trait StepModel {
    type Params;
    type State: Clone;
    type Forcing: Copy;
    type Fluxes;
    type FluxesTimeseries: TimeseriesOps<Self::Fluxes>;

    /// Create the initial state from parameters.
    fn initialize_state(params: &Self::Params) -> Self::State;

    /// Execute one day: given state, params and forcing, return the new
    /// state and that day's fluxes.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
    ) -> (Self::State, Self::Fluxes);

    /// Run the model over a forcing series.
    ///
    /// Default implementation: initialize/use provided state, loop over
    /// forcing calling step.
    fn run(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> Self::FluxesTimeseries {
        let mut state = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(params),
        };

        let mut outputs = Self::FluxesTimeseries::with_capacity(forcing.len());

        for f in forcing {
            let (new_state, fluxes) = Self::step(&state, params, f);
            outputs.push(&fluxes);
            state = new_state;
        }

        outputs
    }

    /// Fold the model over a forcing series, keeping only the final state.
    fn final_state(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> Self::State {
        let init = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(params),
        };
        forcing
            .iter()
            .fold(init, |state, f| Self::step(&state, params, f).0)
    }
}

/// Operations required on the timeseries collection type.
pub trait TimeseriesOps<F> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, f: &F);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}
