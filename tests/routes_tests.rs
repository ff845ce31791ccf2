use calevent::config::Config;
use calevent::errors::AppError;
use calevent::models::Event;
use calevent::routes::{
    AutoRoutes, Identifier, IdentifierStrategy, Operation, Route, RouteNamespace, UrlConf,
};
use calevent::urls::urlconf;
use calevent::views::{GenericView, Model};
use chrono::Utc;

mod common;
use common::open_test_db;

fn event_urls() -> UrlConf {
    urlconf(&Config::default()).unwrap()
}

#[test]
fn test_route_names_and_patterns() {
    let urls = event_urls();
    let table: Vec<(&str, &str)> = urls
        .routes()
        .iter()
        .map(|r| (r.name.as_str(), r.pattern.as_str()))
        .collect();

    assert_eq!(
        table,
        vec![
            ("calendar:Event:list", "/calendar/event/"),
            ("calendar:Event:create", "/calendar/event/create/"),
            ("calendar:Event:detail", "/calendar/event/<pk>/"),
            ("calendar:Event:update", "/calendar/event/<pk>/update/"),
            ("calendar:Event:delete", "/calendar/event/<pk>/delete/"),
        ]
    );
}

#[test]
fn test_reverse() {
    let urls = event_urls();

    assert_eq!(urls.reverse("calendar:Event:list", None).unwrap(), "/calendar/event/");
    assert_eq!(
        urls.reverse("calendar:Event:update", Some(&Identifier::Pk(42)))
            .unwrap(),
        "/calendar/event/42/update/"
    );
}

#[test]
fn test_reverse_needs_matching_arguments() {
    let urls = event_urls();

    assert!(matches!(
        urls.reverse("calendar:Event:detail", None),
        Err(AppError::NoReverseMatch(_))
    ));
    assert!(matches!(
        urls.reverse("calendar:Event:list", Some(&Identifier::Pk(1))),
        Err(AppError::NoReverseMatch(_))
    ));
    assert!(matches!(
        urls.reverse("calendar:Event:detail", Some(&Identifier::Slug("x".into()))),
        Err(AppError::NoReverseMatch(_))
    ));
    assert!(matches!(
        urls.reverse("calendar:Nope:list", None),
        Err(AppError::NoReverseMatch(_))
    ));
}

#[test]
fn test_resolve() {
    let urls = event_urls();

    let resolved = urls.resolve("/calendar/event/7/").unwrap();
    assert_eq!(resolved.name, "calendar:Event:detail");
    assert_eq!(resolved.operation, Operation::Detail);
    assert_eq!(resolved.identifier, Some(Identifier::Pk(7)));
    assert_eq!(resolved.view, GenericView::Detail);

    // "create" is not a pk
    let create = urls.resolve("/calendar/event/create/").unwrap();
    assert_eq!(create.operation, Operation::Create);
    assert_eq!(create.identifier, None);

    assert!(matches!(
        urls.resolve("/calendar/event/abc/"),
        Err(AppError::NoRouteMatch(_))
    ));
}

#[test]
fn test_delete_redirects_to_list() {
    let urls = event_urls();

    let resolved = urls.resolve("/calendar/event/3/delete/").unwrap();
    assert_eq!(
        resolved.view,
        GenericView::Delete {
            success_url_name: "calendar:Event:list".into()
        }
    );
}

#[test]
fn test_view_class() {
    let routes = AutoRoutes::for_model::<Event>("calendar", "calendar/event");

    assert_eq!(routes.prefix(), "/calendar/event/");
    assert_eq!(routes.view_class("Detail").unwrap(), GenericView::Detail);
    assert_eq!(routes.view_class("update").unwrap(), GenericView::Update);
}

#[test]
fn test_view_class_unknown() {
    let routes = AutoRoutes::for_model::<Event>("calendar", "/calendar/event/");

    let err = routes.view_class("Archive").unwrap_err();
    assert_eq!(err.to_string(), "The operation \"Archive\" is unknown.");
}

#[test]
fn test_operation_parse() {
    assert_eq!("LIST".parse::<Operation>().unwrap(), Operation::List);
    assert!("".parse::<Operation>().is_err());
    assert!(!Operation::Create.requires_identifier());
    assert!(Operation::Delete.requires_identifier());
}

#[test]
fn test_slug_routes() {
    let routes = AutoRoutes::new(
        RouteNamespace::new("blog", "Post"),
        "/posts/",
        IdentifierStrategy::Slug,
    );
    let mut urls = UrlConf::new();
    urls.include(&routes).unwrap();

    let path = urls
        .reverse("blog:Post:detail", Some(&Identifier::Slug("hello-world".into())))
        .unwrap();
    assert_eq!(path, "/posts/hello-world/");

    let resolved = urls.resolve("/posts/hello-world/update/").unwrap();
    assert_eq!(resolved.identifier, Some(Identifier::Slug("hello-world".into())));
    assert_eq!(resolved.operation, Operation::Update);
}

#[test]
fn test_duplicate_route_name() {
    let mut urls = event_urls();
    let route = Route::new(
        "calendar:Event:list",
        Operation::List,
        "/elsewhere/",
        GenericView::List,
    )
    .unwrap();

    assert!(matches!(urls.add(route), Err(AppError::DuplicateRoute(_))));
}

#[test]
fn test_model_routed_under_one_namespace_only() {
    let mut urls = event_urls();
    let second = AutoRoutes::for_model::<Event>("archive", "/archive/event/");

    let err = urls.include(&second).unwrap_err();
    assert!(matches!(
        err,
        AppError::DuplicateNamespace { ref app, .. } if app == "calendar"
    ));

    // the rejected include left the table untouched
    assert_eq!(urls.routes().len(), 5);
    assert!(urls.resolve("/archive/event/").is_err());
    assert_eq!(urls.namespace_of("Event").unwrap().app, "calendar");
}

#[test]
fn test_absolute_url() {
    let pool = open_test_db("routes_absolute_url");
    let urls = event_urls();

    let mut event = Event::new("Linked", Utc::now());
    assert!(urls.absolute_url(&event, Operation::Detail).is_err());

    event.save(&pool.conn).unwrap();
    let id = event.pk().unwrap();

    assert_eq!(
        urls.absolute_url(&event, Operation::Detail).unwrap(),
        format!("/calendar/event/{}/", id)
    );
    assert_eq!(
        urls.absolute_url(&event, Operation::List).unwrap(),
        "/calendar/event/"
    );
}
