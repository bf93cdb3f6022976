//! Design-point DOAS sizing.
//!
//! [`size`] threads the outdoor and exhaust air through a fixed pipeline of
//! stages (energy recovery, coil, optional fan heat, reheat), then sizes the
//! supply and extract fans for the resulting airstreams.
//!
//! Every run builds its own [`Atmosphere`](crate::support::psychro::Atmosphere)
//! from the site altitude, so concurrent runs never interfere.

mod error;
mod fans;
mod input;
mod pressure_drop;
mod results;
mod stages;

pub use error::SizingError;
pub use input::{
    Coil, CoilType, ComponentPressureDrops, EnthalpyWheel, ExhaustAir, Fans, HeatPipe,
    OutdoorAir, Reheat, ReheatSource, SensibleWheel, SystemInputs,
};
pub use results::{
    Component, CoolingLoad, FanResult, ProcessStep, RecoveredEnergy, ReheatDuty, SystemResults,
};

use tracing::debug;
use uom::si::{
    f64::{MassDensity, Power, Pressure, VolumeRate},
    mass_density::kilogram_per_cubic_meter,
    power::kilowatt,
    pressure::kilopascal,
    volume_rate::{cubic_meter_per_hour, cubic_meter_per_second, liter_per_second},
};

use crate::support::psychro::{
    AirState, Atmosphere, HumidityRatio, vapor_pressure_from_relative_humidity,
};

use stages::{Context, PIPELINE, Progress};

/// Sizes a DOAS unit at its design point.
///
/// # Errors
///
/// Returns [`SizingError::Altitude`] if the site altitude gives no valid
/// barometric pressure, [`SizingError::InvalidHumidityRatio`] if an inlet
/// humidity ratio is NaN or a stage produces a negative one, and
/// [`SizingError::NonFinite`] if any temperature, load, flow, or power comes
/// out infinite or NaN.
pub fn size(inputs: &SystemInputs) -> Result<SystemResults, SizingError> {
    let atmosphere =
        Atmosphere::at_altitude(inputs.altitude).map_err(|source| SizingError::Altitude {
            altitude: inputs.altitude,
            source,
        })?;

    let outdoor = &inputs.outdoor;
    let exhaust = &inputs.exhaust;

    let w_oa = inlet_humidity_ratio(
        "OA",
        &atmosphere,
        atmosphere.vapor_pressure_from_wet_bulb(outdoor.dry_bulb, outdoor.wet_bulb),
    )?;
    let w_ra = inlet_humidity_ratio(
        "RA",
        &atmosphere,
        vapor_pressure_from_relative_humidity(exhaust.dry_bulb, exhaust.relative_humidity),
    )?;
    let oa = AirState::new("OA", outdoor.dry_bulb, w_oa);
    let ra = AirState::new("RA", exhaust.dry_bulb, w_ra);

    let air_density = atmosphere.density(outdoor.dry_bulb);
    let ctx = Context {
        inputs,
        atmosphere,
        m_oa: mass_flow(outdoor.flow, air_density),
        m_ra: mass_flow(exhaust.flow, atmosphere.density(exhaust.dry_bulb)),
    };

    debug!(
        pressure_kpa = atmosphere.pressure().get::<kilopascal>(),
        m_oa = ctx.m_oa,
        m_ra = ctx.m_ra,
        "sizing DOAS"
    );

    let mut progress = Progress::new(oa.clone(), ra.clone());
    for stage in PIPELINE {
        stage.run(&ctx, &mut progress)?;
    }

    let supply_air = progress.supply.relabeled("SA");
    let supply_flow = VolumeRate::new::<cubic_meter_per_second>(
        ctx.m_oa / supply_air.density(&atmosphere).get::<kilogram_per_cubic_meter>(),
    );

    // Extract fan moves room air at room conditions.
    let extract_flow = exhaust.flow;

    let supply_fan = fans::size(
        supply_flow,
        pressure_drop::supply(inputs),
        inputs.fans.supply_external_static,
        &inputs.fans,
    );
    let extract_fan = fans::size(
        extract_flow,
        pressure_drop::extract(inputs),
        inputs.fans.extract_external_static,
        &inputs.fans,
    );

    let results = SystemResults {
        steps: progress.steps,
        chart_points: vec![oa, ra, supply_air],
        air_density,
        cooling: progress.cooling,
        total_heating: progress.heating,
        main_coil_water_flow: progress.coil_water_flow,
        reheat: progress.reheat,
        recovered: progress.recovered,
        supply_fan,
        extract_fan,
    };

    check_finite(&results)?;

    debug!(
        cooling_kw = results.cooling.total.get::<kilowatt>(),
        heating_kw = results.total_heating.get::<kilowatt>(),
        reheat_kw = results.reheat.load.get::<kilowatt>(),
        fan_kw = results.total_fan_power().get::<kilowatt>(),
        "DOAS sized"
    );

    Ok(results)
}

fn inlet_humidity_ratio(
    point: &str,
    atmosphere: &Atmosphere,
    vapor_pressure: Pressure,
) -> Result<HumidityRatio, SizingError> {
    atmosphere
        .try_humidity_ratio(vapor_pressure)
        .map_err(|_| SizingError::InvalidHumidityRatio {
            point: point.to_owned(),
            value: f64::NAN,
        })
}

/// Dry-air mass flow in kg/s.
fn mass_flow(flow: VolumeRate, density: MassDensity) -> f64 {
    flow.get::<cubic_meter_per_second>() * density.get::<kilogram_per_cubic_meter>()
}

fn check_finite(results: &SystemResults) -> Result<(), SizingError> {
    let power = |p: Power| p.get::<kilowatt>();
    let flow = |q: VolumeRate| q.get::<liter_per_second>();

    let mut quantities = vec![
        (
            "air density",
            results.air_density.get::<kilogram_per_cubic_meter>(),
        ),
        ("total cooling", power(results.cooling.total)),
        ("sensible cooling", power(results.cooling.sensible)),
        ("latent cooling", power(results.cooling.latent)),
        ("total heating", power(results.total_heating)),
        ("main coil water flow", flow(results.main_coil_water_flow)),
        ("reheat load", power(results.reheat.load)),
        ("reheat water flow", flow(results.reheat.water_flow)),
        (
            "gas consumption",
            results.reheat.gas_consumption.get::<cubic_meter_per_hour>(),
        ),
        ("heat pipe recovery", power(results.recovered.heat_pipe)),
        ("sensible wheel recovery", power(results.recovered.sensible_wheel)),
    ];

    for (fan, [flow_name, absorbed_name, electrical_name]) in [
        (
            &results.supply_fan,
            [
                "supply fan volume flow",
                "supply fan absorbed power",
                "supply fan electrical power",
            ],
        ),
        (
            &results.extract_fan,
            [
                "extract fan volume flow",
                "extract fan absorbed power",
                "extract fan electrical power",
            ],
        ),
    ] {
        quantities.extend([
            (flow_name, flow(fan.volume_flow)),
            (absorbed_name, power(fan.absorbed_power)),
            (electrical_name, power(fan.electrical_power)),
        ]);
    }

    for point in &results.chart_points {
        quantities.push(("chart point dry bulb", point.celsius()));
    }

    for (quantity, value) in quantities {
        SizingError::check_finite(quantity, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{Length, Ratio, ThermodynamicTemperature},
        length::meter,
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::psychro::CP_DRY_AIR;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    /// Design day with balanced outdoor and exhaust flows.
    fn design_day() -> SystemInputs {
        let mut inputs = SystemInputs::default();
        inputs.exhaust.flow = VolumeRate::new::<liter_per_second>(1000.0);
        inputs
    }

    fn components(results: &SystemResults) -> Vec<Component> {
        results.steps.iter().map(|step| step.component).collect()
    }

    #[test]
    fn design_day_with_enthalpy_wheel() {
        let results = size(&design_day()).unwrap();

        assert!(results.cooling.total.get::<kilowatt>() > 0.0);
        assert!(results.step(Component::EnthalpyWheelOutdoor).is_some());
        assert!(results.step(Component::CoolingCoil).is_some());

        let atmosphere = Atmosphere::standard();
        let supply = results.supply_air().unwrap();
        assert!(supply.humidity_ratio() <= atmosphere.saturation_humidity_ratio(celsius(12.0)));
        assert_relative_eq!(supply.celsius(), 12.0);

        let wheel = &results.step(Component::EnthalpyWheelOutdoor).unwrap().leaving;
        assert_relative_eq!(wheel.celsius(), 26.75, epsilon = 1e-9);
        assert_relative_eq!(wheel.kg_per_kg(), 0.01278, epsilon = 1e-4);

        assert_relative_eq!(
            results.air_density.get::<kilogram_per_cubic_meter>(),
            1.1457,
            epsilon = 1e-3
        );
    }

    #[test]
    fn bare_unit_has_only_a_coil() {
        let results = size(&SystemInputs::default().without_recovery()).unwrap();

        assert_eq!(components(&results), [Component::CoolingCoil]);
        let labels: Vec<_> = results.chart_points.iter().map(AirState::label).collect();
        assert_eq!(labels, ["OA", "RA", "SA"]);
        assert_relative_eq!(results.reheat.load.get::<kilowatt>(), 0.0);
        assert_relative_eq!(results.recovered.total().get::<kilowatt>(), 0.0);
    }

    #[test]
    fn full_recovery_runs_in_physical_order() {
        let mut inputs = design_day();
        inputs.sensible_wheel.enabled = true;
        inputs.heat_pipe.enabled = true;
        inputs.reheat.enabled = true;
        inputs.reheat.target_supply_temperature = celsius(35.0);
        inputs.fans.include_fan_heat = true;

        let results = size(&inputs).unwrap();

        assert_eq!(
            components(&results),
            [
                Component::SensibleWheelExhaust,
                Component::EnthalpyWheelOutdoor,
                Component::EnthalpyWheelExhaust,
                Component::HeatPipePreCool,
                Component::CoolingCoil,
                Component::SupplyFanHeat,
                Component::HeatPipeReheat,
                Component::SensibleWheelReheat,
                Component::SupplementaryReheat,
            ]
        );

        // The enthalpy wheel sees exhaust already pre-cooled by the sensible wheel.
        let pre_cooled = &results.step(Component::SensibleWheelExhaust).unwrap().leaving;
        let wheel_ea = &results.step(Component::EnthalpyWheelExhaust).unwrap().entering;
        assert_eq!(pre_cooled, wheel_ea);

        // Each step picks up where the previous one on the same airstream left off.
        let supply_steps: Vec<_> = results
            .steps
            .iter()
            .filter(|step| !step.component.is_exhaust_side())
            .collect();
        for pair in supply_steps.windows(2) {
            assert_eq!(pair[0].leaving, pair[1].entering);
        }

        assert_relative_eq!(results.supply_air().unwrap().celsius(), 35.0);
    }

    #[test]
    fn recovery_reheat_returns_the_same_heat() {
        let mut inputs = design_day();
        inputs.sensible_wheel.enabled = true;
        inputs.heat_pipe.enabled = true;

        let results = size(&inputs).unwrap();
        let m_oa = results.air_density.get::<kilogram_per_cubic_meter>();

        let hp = results.step(Component::HeatPipeReheat).unwrap();
        assert_relative_eq!(
            m_oa * CP_DRY_AIR * (hp.leaving.celsius() - hp.entering.celsius()),
            results.recovered.heat_pipe.get::<kilowatt>(),
            epsilon = 1e-9
        );

        let sw = results.step(Component::SensibleWheelReheat).unwrap();
        assert_relative_eq!(
            m_oa * CP_DRY_AIR * (sw.leaving.celsius() - sw.entering.celsius()),
            results.recovered.sensible_wheel.get::<kilowatt>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn enthalpy_wheel_balance_holds_in_pipeline() {
        let mut inputs = SystemInputs::default();
        inputs.sensible_wheel.enabled = true;
        let results = size(&inputs).unwrap();

        let m_oa = results.air_density.get::<kilogram_per_cubic_meter>();
        let m_ra = 0.8 * Atmosphere::standard()
            .density(inputs.exhaust.dry_bulb)
            .get::<kilogram_per_cubic_meter>();

        let oa = results.step(Component::EnthalpyWheelOutdoor).unwrap();
        let ea = results.step(Component::EnthalpyWheelExhaust).unwrap();
        assert_relative_eq!(
            m_oa * (oa.entering.kj_per_kg() - oa.leaving.kj_per_kg()),
            m_ra * (ea.leaving.kj_per_kg() - ea.entering.kj_per_kg()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let mut inputs = design_day();
        inputs.heat_pipe.enabled = true;
        inputs.reheat.enabled = true;

        assert_eq!(size(&inputs).unwrap(), size(&inputs).unwrap());
    }

    #[test]
    fn fans_are_sized_for_both_paths() {
        let results = size(&SystemInputs::default()).unwrap();

        let supply = results.supply_fan;
        assert_relative_eq!(supply.internal_pressure_drop.get::<pascal>(), 900.0);
        assert_relative_eq!(supply.total_static_pressure.get::<pascal>(), 1400.0);

        // Supply air leaves the coil colder and denser than outdoor air.
        assert!(supply.volume_flow.get::<liter_per_second>() < 1000.0);
        assert_relative_eq!(
            results.extract_fan.volume_flow.get::<liter_per_second>(),
            800.0
        );

        assert_relative_eq!(
            results.total_fan_power().get::<kilowatt>(),
            supply.absorbed_power.get::<kilowatt>()
                + results.extract_fan.absorbed_power.get::<kilowatt>()
        );
        assert!(results.total_electrical_power() > results.total_fan_power());
        assert!(supply.motor >= supply.electrical_power);
    }

    #[test]
    fn heat_pipe_adds_to_extract_fan_pressure() {
        let mut inputs = SystemInputs::default().without_recovery();
        inputs.heat_pipe.enabled = true;
        let results = size(&inputs).unwrap();

        assert_relative_eq!(
            results.extract_fan.internal_pressure_drop.get::<pascal>(),
            300.0
        );
        assert_relative_eq!(
            results.extract_fan.total_static_pressure.get::<pascal>(),
            800.0
        );
    }

    #[test]
    fn altitude_lowers_density() {
        let mut inputs = SystemInputs::default();
        inputs.altitude = Length::new::<meter>(1500.0);
        let high = size(&inputs).unwrap();
        let sea_level = size(&SystemInputs::default()).unwrap();

        assert!(high.air_density < sea_level.air_density);
        assert!(high.cooling.total < sea_level.cooling.total);
    }

    #[test]
    fn unreachable_altitude_fails() {
        let mut inputs = SystemInputs::default();
        inputs.altitude = Length::new::<meter>(60_000.0);
        assert!(matches!(size(&inputs), Err(SizingError::Altitude { .. })));
    }

    #[test]
    fn zero_fan_efficiency_fails_as_non_finite() {
        let mut inputs = SystemInputs::default();
        inputs.fans.fan_efficiency = Ratio::new::<ratio>(0.0);
        assert!(matches!(size(&inputs), Err(SizingError::NonFinite { .. })));
    }

    #[test]
    fn nan_temperature_fails() {
        let mut inputs = SystemInputs::default();
        inputs.outdoor.dry_bulb = celsius(f64::NAN);
        assert!(size(&inputs).is_err());
    }

    #[test]
    fn nan_outdoor_wet_bulb_is_an_invalid_humidity_ratio() {
        let mut inputs = SystemInputs::default();
        inputs.outdoor.wet_bulb = celsius(f64::NAN);
        match size(&inputs) {
            Err(SizingError::InvalidHumidityRatio { point, value }) => {
                assert_eq!(point, "OA");
                assert!(value.is_nan());
            }
            other => panic!("expected an invalid OA humidity ratio, got {other:?}"),
        }
    }

    #[test]
    fn nan_room_humidity_is_an_invalid_humidity_ratio() {
        let mut inputs = SystemInputs::default();
        inputs.exhaust.relative_humidity = Ratio::new::<ratio>(f64::NAN);
        assert!(matches!(
            size(&inputs),
            Err(SizingError::InvalidHumidityRatio { point, .. }) if point == "RA"
        ));
    }

    #[test]
    fn zero_outdoor_flow_does_not_divide_by_zero() {
        let mut inputs = SystemInputs::default();
        inputs.outdoor.flow = VolumeRate::new::<liter_per_second>(0.0);
        inputs.heat_pipe.enabled = true;

        let results = size(&inputs).unwrap();
        assert_relative_eq!(results.cooling.total.get::<kilowatt>(), 0.0);
        assert_relative_eq!(results.supply_fan.absorbed_power.get::<kilowatt>(), 0.0);
    }

    proptest! {
        #[test]
        fn coil_never_adds_moisture(
            dry_bulb in -10.0..45.0_f64,
            depression in 0.0..15.0_f64,
            off_coil in 5.0..20.0_f64,
            wheel in any::<bool>(),
        ) {
            let mut inputs = SystemInputs::default();
            inputs.outdoor.dry_bulb = celsius(dry_bulb);
            inputs.outdoor.wet_bulb = celsius(dry_bulb - depression);
            inputs.coil.off_coil_temperature = celsius(off_coil);
            inputs.enthalpy_wheel.enabled = wheel;

            let results = size(&inputs).unwrap();
            let coil = results.step(Component::CoolingCoil).unwrap();
            let w_sat = Atmosphere::standard().saturation_humidity_ratio(celsius(off_coil));

            prop_assert!(coil.leaving.humidity_ratio() <= coil.entering.humidity_ratio());
            prop_assert!(coil.leaving.humidity_ratio() <= w_sat);
            prop_assert!(results.cooling.latent.get::<kilowatt>() >= 0.0);
        }
    }
}
