use search_core::{DocumentStatus, RequestQueue, SearchServer, REQUEST_WINDOW};

fn pets_server() -> SearchServer {
    let mut server = SearchServer::new("and in at").unwrap();
    server.add_document(1, "curly cat curly tail", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    server.add_document(2, "curly dog and fancy collar", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    server.add_document(3, "big cat fancy collar", DocumentStatus::Active, &[1, 2, 8]).unwrap();
    server.add_document(4, "big dog sparrow Eugene", DocumentStatus::Active, &[1, 3, 2]).unwrap();
    server.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Active, &[1, 1, 1]).unwrap();
    server
}

#[test]
fn counts_empty_requests_over_a_day() {
    let server = pets_server();
    let mut queue = RequestQueue::new(&server);
    for _ in 0..1439 {
        assert!(queue.add_find_request("empty request").unwrap().is_empty());
    }
    assert_eq!(queue.no_result_requests(), 1439);
    assert!(!queue.add_find_request("curly dog").unwrap().is_empty());
    assert_eq!(queue.no_result_requests(), 1439);
    assert!(!queue.add_find_request("big collar").unwrap().is_empty());
    assert_eq!(queue.no_result_requests(), 1438);
    assert!(!queue.add_find_request("sparrow").unwrap().is_empty());
    assert_eq!(queue.no_result_requests(), 1437);
}

#[test]
fn window_holds_last_calls_only() {
    let server = pets_server();
    let mut queue = RequestQueue::new(&server);
    assert_eq!(queue.window(), REQUEST_WINDOW);
    queue.add_find_request("nothing here").unwrap();
    for _ in 1..REQUEST_WINDOW {
        queue.add_find_request("sparrow").unwrap();
    }
    assert_eq!(queue.no_result_requests(), 1);
    // the first call leaves, a new empty one arrives
    queue.add_find_request("nothing again").unwrap();
    assert_eq!(queue.no_result_requests(), 1);
    queue.add_find_request("sparrow").unwrap();
    assert_eq!(queue.no_result_requests(), 1);
    assert_eq!(queue.recent_queries().count(), REQUEST_WINDOW);
}
