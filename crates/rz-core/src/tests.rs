//! Unit tests for rz-core primitives.

#[cfg(test)]
mod ids {
    use crate::CellId;

    #[test]
    fn index_roundtrip() {
        let id = CellId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CellId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CellId(0) < CellId(1));
        assert!(CellId(100) > CellId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(CellId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CellId(7).to_string(), "CellId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.2, -87.4);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn one_degree_latitude_is_about_111km() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.9).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bbox_check() {
        let center = GeoPoint::new(30.694, -88.043);
        let nearby = GeoPoint::new(30.700, -88.040);
        let far = GeoPoint::new(31.5, -88.043);
        assert!(nearby.within_bbox(center, 0.1));
        assert!(!far.within_bbox(center, 0.1));
    }

    #[test]
    fn bbox_width_height() {
        use crate::geo::BBox;
        let b = BBox {
            left: -88.05,
            bottom: 30.69,
            right: -88.04,
            top: 30.70,
        };
        assert!(b.width_m() > 0.0);
        assert!(b.height_m() > 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::ClassifierRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ClassifierRng::new(12345);
        let mut r2 = ClassifierRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_for_different_rls_diverge() {
        let mut root = ClassifierRng::new(1);
        let mut c1 = root.child_for_rl(1);
        let mut c2 = root.child_for_rl(2);
        let a: u64 = c1.gen_range(0..u64::MAX);
        let b: u64 = c2.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ClassifierRng::new(0);
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::config::{EduAlg, JobDescriptor, PoiTypeTable};
    use crate::geo::BBox;

    fn base_job() -> JobDescriptor {
        JobDescriptor {
            bbox: BBox { left: -88.05, bottom: 30.69, right: -88.04, top: 30.70 },
            zone_size: 100.0,
            m: 4,
            edus: Default::default(),
            pois_path: None,
            pois_types: PoiTypeTable::default(),
            geojson_path: None,
            edu_alg: EduAlg::Unbalanced,
            connectivity_threshold: 0.5,
            cache_zones: false,
            cache_path: None,
            seed: 0,
            output: None,
            output_edus: None,
            output_roads: None,
            output_rivers: None,
            output_elevation: None,
            output_slope: None,
            output_connectivity: None,
            res_data: None,
        }
    }

    #[test]
    fn valid_job_passes() {
        assert!(base_job().validate().is_ok());
    }

    #[test]
    fn rejects_zero_m() {
        let mut j = base_job();
        j.m = 0;
        assert!(j.validate().is_err());
    }

    #[test]
    fn rejects_nonpositive_zone_size() {
        let mut j = base_job();
        j.zone_size = 0.0;
        assert!(j.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bbox() {
        let mut j = base_job();
        j.bbox.right = j.bbox.left - 1.0;
        assert!(j.validate().is_err());
    }

    #[test]
    fn edu_alg_parses_historical_names() {
        assert_eq!(EduAlg::parse("random").unwrap(), EduAlg::Random);
        assert_eq!(EduAlg::parse("balanced").unwrap(), EduAlg::Unbalanced);
        assert_eq!(EduAlg::parse("enhanced").unwrap(), EduAlg::Balanced);
        assert_eq!(EduAlg::parse("restricted").unwrap(), EduAlg::Restricted);
        assert_eq!(EduAlg::parse("restricted_plus").unwrap(), EduAlg::RestrictedPlus);
        assert!(EduAlg::parse("bogus").is_err());
    }
}
