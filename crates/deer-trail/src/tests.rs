//! Unit tests for deer-trail.

#[cfg(test)]
mod helpers {
    use deer_core::{LocationId, MarkerId, Point};

    use crate::Marker;

    pub const HUB: Point = Point::new(90.0, 90.0);
    pub const SITE: Point = Point::new(10.0, 10.0);

    /// A finalized marker spanning hub → site.
    pub fn finalized() -> Marker {
        let mut m = Marker::new(MarkerId(0), LocationId(0), SITE, HUB);
        m.paint_to(Point::new(50.0, 50.0));
        m.finalize(HUB);
        m
    }
}

#[cfg(test)]
mod marker {
    use deer_core::{LocationId, MarkerId, Point};

    use super::helpers::{HUB, SITE, finalized};
    use crate::{DISABLED_SENTINEL, Marker, MarkerPhase};

    #[test]
    fn new_marker_is_growing_and_degenerate() {
        let m = Marker::new(MarkerId(1), LocationId(4), SITE, HUB);
        assert_eq!(m.phase(), MarkerPhase::Growing);
        assert_eq!(m.startpoint(), SITE);
        assert_eq!(m.endpoint(), SITE);
        assert_eq!(m.direction(), Point::new(-80.0, -80.0));
        // Zero-length trail cannot be crossed.
        assert!(!m.is_touched_by(Point::new(0.0, 20.0), Point::new(20.0, 0.0)));
    }

    #[test]
    fn painting_then_finalizing_locks_startpoint() {
        let mut m = Marker::new(MarkerId(1), LocationId(4), SITE, HUB);
        m.paint_to(Point::new(30.0, 30.0));
        assert_eq!(m.startpoint(), Point::new(30.0, 30.0));
        assert!(m.finalize(HUB));
        assert!(m.is_finalized());
        assert!(!m.finalize(HUB));
        assert_eq!(m.startpoint(), HUB);
        // Further painting is ignored.
        m.paint_to(Point::new(40.0, 40.0));
        assert_eq!(m.startpoint(), HUB);
    }

    #[test]
    fn crossing_segment_touches() {
        let m = finalized();
        assert!(m.is_touched_by(Point::new(40.0, 60.0), Point::new(60.0, 40.0)));
        assert!(!m.is_touched_by(Point::new(0.0, 60.0), Point::new(5.0, 60.0)));
    }

    #[test]
    fn erasing_drags_endpoint() {
        let mut m = finalized();
        assert!(m.begin_erasing());
        m.erase_to(Point::new(30.0, 30.0));
        assert_eq!(m.endpoint(), Point::new(30.0, 30.0));
        assert_eq!(m.startpoint(), HUB);
    }

    #[test]
    fn painter_finalizing_an_erasing_marker_keeps_it_erasing() {
        let mut m = Marker::new(MarkerId(1), LocationId(4), SITE, HUB);
        m.paint_to(Point::new(30.0, 30.0));
        assert!(m.begin_erasing());
        assert!(!m.finalize(HUB));
        assert_eq!(m.phase(), MarkerPhase::Erasing);
        assert_eq!(m.startpoint(), HUB);
    }

    #[test]
    fn disable_is_idempotent() {
        let mut m = finalized();
        m.disable();
        let once = m.clone();
        m.disable();
        assert_eq!(m, once);
        assert!(m.is_disabled());
        assert_eq!(m.location(), None);
        assert_eq!(m.startpoint(), DISABLED_SENTINEL);
        assert_eq!(m.endpoint(), DISABLED_SENTINEL);
        assert!(!m.begin_erasing());
        assert!(!m.finalize(HUB));
    }

    #[test]
    fn leads_from_checks_both_axes() {
        let m = finalized(); // direction (-80, -80)
        assert!(m.leads_from(Point::new(50.0, 50.0)));
        assert!(m.leads_from(SITE));
        // Past the endpoint on the x axis.
        assert!(!m.leads_from(Point::new(5.0, 50.0)));
    }
}

#[cfg(test)]
mod list {
    use deer_core::{LocationId, Point};

    use super::helpers::{HUB, SITE};
    use crate::MarkerList;

    fn list_with_two_finalized() -> MarkerList {
        let mut list = MarkerList::new();
        for loc in [LocationId(0), LocationId(1)] {
            let id = list.create(loc, SITE, HUB);
            list.get_mut(id).unwrap().finalize(HUB);
        }
        list
    }

    #[test]
    fn first_touched_respects_list_order() {
        let list = list_with_two_finalized();
        let first = list.iter().next().unwrap().id;
        assert_eq!(
            list.first_touched(Point::new(40.0, 60.0), Point::new(60.0, 40.0)),
            Some(first)
        );
    }

    #[test]
    fn disabled_markers_are_invisible_until_pruned() {
        let mut list = list_with_two_finalized();
        let first = list.iter().next().unwrap().id;
        list.get_mut(first).unwrap().disable();

        assert_eq!(list.find_by_location(LocationId(0)), None);
        assert_eq!(list.finalized().len(), 1);
        let touched = list.first_touched(Point::new(40.0, 60.0), Point::new(60.0, 40.0));
        assert_ne!(touched, Some(first));

        assert_eq!(list.len(), 2);
        assert_eq!(list.prune_disabled(), 1);
        assert_eq!(list.len(), 1);
        assert!(list.get(first).is_none());
    }

    #[test]
    fn spent_marker_is_pruned_immediately() {
        let mut list = MarkerList::new();
        let id = list.create_spent(LocationId(7), SITE, HUB);
        assert!(list.get(id).unwrap().is_disabled());
        assert_eq!(list.find_by_location(LocationId(7)), None);
        assert_eq!(list.prune_disabled(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_prune() {
        let mut list = MarkerList::new();
        let a = list.create(LocationId(0), SITE, HUB);
        list.get_mut(a).unwrap().disable();
        list.prune_disabled();
        let b = list.create(LocationId(1), SITE, HUB);
        assert_ne!(a, b);
    }

    #[test]
    fn growing_markers_are_not_finalized() {
        let mut list = MarkerList::new();
        list.create(LocationId(0), SITE, HUB);
        assert!(list.finalized().is_empty());
        assert_eq!(list.find_by_location(LocationId(0)).map(|id| id.0), Some(0));
    }
}
