//! Integration tests for plan items and goals

use semtalk_grammar::GrammarErrorKind;
use semtalk_model::{
    Goal, PlanItem, Preconfirmation, Question, SemanticObject, ServiceActionOptions, Speaker,
};

use crate::common::{domain_parser, parser};

fn plan_item(input: &str) -> PlanItem {
    match parser().parse(input).unwrap() {
        SemanticObject::PlanItem(item) => item,
        other => panic!("expected a plan item, got {other:?}"),
    }
}

fn goal(input: &str) -> Goal {
    match parser().parse(input).unwrap() {
        SemanticObject::Goal(goal) => goal,
        other => panic!("expected a goal, got {other:?}"),
    }
}

// =============================================================================
// Question-taking Items
// =============================================================================

#[test]
fn findout_carries_domain_name() {
    let mut parser = domain_parser("flights");
    let SemanticObject::PlanItem(PlanItem::Findout {
        domain_name,
        question,
    }) = parser.parse("findout(?X.price(X))").unwrap()
    else {
        panic!("expected findout");
    };
    assert_eq!(domain_name.as_deref(), Some("flights"));
    assert!(matches!(question, Question::Wh(_)));
}

#[test]
fn raise_without_domain() {
    let PlanItem::Raise { domain_name, .. } = plan_item("raise(?X.dest_city(X))") else {
        panic!("expected raise");
    };
    assert!(domain_name.is_none());
}

#[test]
fn bind_respond_consult() {
    assert!(matches!(plan_item("bind(?X.price(X))"), PlanItem::Bind(_)));
    assert!(matches!(plan_item("respond(?need_visa)"), PlanItem::Respond(_)));
    assert!(matches!(
        plan_item("consultDB(?X.price(X))"),
        PlanItem::ConsultDb(_)
    ));
}

#[test]
fn question_items_need_a_question() {
    assert!(parser().parse("findout(dest_city(paris))").is_err());
}

// =============================================================================
// Control
// =============================================================================

#[test]
fn do_item() {
    assert!(matches!(plan_item("do(buy)"), PlanItem::Do(ref a) if a.name == "buy"));
    assert!(parser().parse("do(sell)").is_err());
}

#[test]
fn if_then_else_with_empty_alternative() {
    let PlanItem::IfThenElse {
        condition,
        consequent,
        alternative,
    } = plan_item("if dest_city(paris) then findout(?X.price(X)) else ")
    else {
        panic!("expected if-then-else");
    };
    assert!(condition.is_positive());
    assert_eq!(consequent.len(), 1);
    assert!(alternative.is_empty());
}

#[test]
fn if_then_else_with_both_branches() {
    let PlanItem::IfThenElse {
        consequent,
        alternative,
        ..
    } = plan_item("if ~need_visa then do(buy) else forget_all")
    else {
        panic!("expected if-then-else");
    };
    assert!(matches!(
        consequent.get(0),
        Some(SemanticObject::PlanItem(PlanItem::Do(_)))
    ));
    assert_eq!(
        alternative.get(0),
        Some(&SemanticObject::PlanItem(PlanItem::ForgetAll))
    );
}

#[test]
fn jumpto() {
    assert!(matches!(
        plan_item("jumpto(perform(buy))"),
        PlanItem::JumpTo(Goal::Perform(_))
    ));
}

#[test]
fn forget_and_assume() {
    assert_eq!(plan_item("forget_all"), PlanItem::ForgetAll);
    assert!(matches!(plan_item("forget(dest_city(paris))"), PlanItem::Forget(_)));
    assert!(matches!(
        plan_item("forget_issue(?X.price(X))"),
        PlanItem::ForgetIssue(_)
    ));
    assert!(matches!(plan_item("assume(dest_city(paris))"), PlanItem::Assume(_)));
    assert!(matches!(
        plan_item("assume_shared(~need_visa)"),
        PlanItem::AssumeShared(ref p) if !p.is_positive()
    ));
    assert!(matches!(
        plan_item("assume_issue(?X.price(X))"),
        PlanItem::AssumeIssue(_)
    ));
}

#[test]
fn goal_signals() {
    assert_eq!(plan_item("signal_action_completion"), PlanItem::GoalPerformed);
    assert_eq!(
        plan_item("signal_action_failure(no_seats)"),
        PlanItem::GoalAborted {
            reason: "no_seats".into()
        }
    );
    assert_eq!(
        plan_item("signal_action_failure(can't book)"),
        PlanItem::GoalAborted {
            reason: "can't book".into()
        }
    );
}

#[test]
fn log_message() {
    assert_eq!(
        plan_item("log(\"booking (step 2) done\")"),
        PlanItem::Log {
            message: "booking (step 2) done".into()
        }
    );
    assert!(parser().parse("log(\"\")").is_err());
}

// =============================================================================
// Service Invocation
// =============================================================================

#[test]
fn service_query() {
    let PlanItem::InvokeServiceQuery {
        min_results,
        max_results,
        ..
    } = plan_item("invoke_service_query(?X.price(X))")
    else {
        panic!("expected a service query");
    };
    assert_eq!((min_results, max_results), (1, 1));
    assert_eq!(
        plan_item("dev_query(?X.price(X))"),
        plan_item("invoke_service_query(?X.price(X))")
    );
}

#[test]
fn service_action_defaults() {
    let PlanItem::InvokeServiceAction {
        ontology_name,
        service_action,
        options,
    } = plan_item("invoke_service_action(buy, {})")
    else {
        panic!("expected a service action");
    };
    assert_eq!(ontology_name, "travel");
    assert_eq!(service_action, "buy");
    assert_eq!(options, ServiceActionOptions::default());
}

#[test]
fn service_action_options() {
    let PlanItem::InvokeServiceAction { options, .. } =
        plan_item("invoke_service_action(buy, {postconfirm=true})")
    else {
        panic!("expected a service action");
    };
    assert!(options.postconfirm);
    assert!(options.downdate_plan);
    assert_eq!(options.preconfirm, None);

    let PlanItem::InvokeServiceAction { options, .. } =
        plan_item("dev_perform(buy, {preconfirm=interrogative, downdate_plan=False})")
    else {
        panic!("expected a service action");
    };
    assert_eq!(options.preconfirm, Some(Preconfirmation::Interrogative));
    assert!(!options.downdate_plan);
}

#[test]
fn service_action_unknown_option() {
    let err = parser()
        .parse("invoke_service_action(buy, {retries=3})")
        .unwrap_err();
    assert!(matches!(
        err.kind,
        GrammarErrorKind::UnsupportedParameter { ref key, .. } if key == "retries"
    ));
    assert_eq!(err.input(), Some("invoke_service_action(buy, {retries=3})"));
}

// =============================================================================
// Goals
// =============================================================================

#[test]
fn resolve_goals() {
    assert!(matches!(
        goal("resolve(?X.price(X))"),
        Goal::Resolve {
            speaker: Speaker::Sys,
            ..
        }
    ));
    assert!(matches!(
        goal("resolve_user(?X.price(X))"),
        Goal::Resolve {
            speaker: Speaker::Usr,
            ..
        }
    ));
}

#[test]
fn perform_and_handle_goals() {
    assert!(matches!(goal("perform(buy)"), Goal::Perform(ref a) if a.name == "buy"));
    assert_eq!(
        goal("handle(confirm_booking)"),
        Goal::Handle {
            ontology_name: "travel".into(),
            service_action: "confirm_booking".into(),
        }
    );
}

#[test]
fn goal_needs_a_known_action() {
    assert!(parser().parse("perform(sell)").is_err());
}
