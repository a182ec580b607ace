pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{candidate_builder::*, point_builder::*};

pub mod candidate_builder {

    use super::*;
    use crate::candidate::*;

    #[derive(Debug)]
    pub struct CandidateBuild {
        candidate: Candidate,
    }

    impl CandidateBuild {
        pub fn coordinates(mut self, lng: f64, lat: f64) -> Self {
            self.candidate.coordinates = vec![lng, lat];
            self
        }
        pub fn label(mut self, label: &str) -> Self {
            self.candidate.properties.label = Some(label.into());
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.candidate.properties.city = Some(city.into());
            self
        }
        pub fn postcode(mut self, postcode: &str) -> Self {
            self.candidate.properties.postcode = Some(postcode.into());
            self
        }
        pub fn score(mut self, score: f64) -> Self {
            self.candidate.properties.score = Some(score);
            self
        }
        pub fn finish(self) -> Candidate {
            self.candidate
        }
    }

    impl Builder for Candidate {
        type Build = CandidateBuild;
        fn build() -> CandidateBuild {
            CandidateBuild {
                candidate: Candidate::default(),
            }
        }
    }
}

pub mod point_builder {

    use super::*;
    use crate::{geo::*, point::*};

    #[derive(Debug)]
    pub struct PointFeatureBuild {
        feature: PointFeature,
    }

    impl PointFeatureBuild {
        pub fn pos(mut self, lng: f64, lat: f64) -> Self {
            self.feature.pos = Some(MapPoint::from_lng_lat_deg(lng, lat));
            self.feature.attributes.longitude = lng;
            self.feature.attributes.latitude = lat;
            self
        }
        pub fn label(mut self, label: &str) -> Self {
            self.feature.attributes.label = label.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.feature.attributes.city = city.into();
            self
        }
        pub fn finish(self) -> PointFeature {
            self.feature
        }
    }

    impl Builder for PointFeature {
        type Build = PointFeatureBuild;
        fn build() -> PointFeatureBuild {
            PointFeatureBuild {
                feature: PointFeature {
                    pos: None,
                    attributes: PointAttributes::default(),
                },
            }
        }
    }
}
