mod common;

use dtserver_sdk::models::JobState;
use dtserver_sdk::SdkError;
use pretty_assertions::assert_eq;
use wiremock::matchers::{any, basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, PASSWORD, USERNAME};

const JOB_PATH: &str = "/rest/management/profiles/easyTravel/memorydumpjobs/job-17";

#[tokio::test]
async fn get_memory_dump_job_decodes_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOB_PATH))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<memorydumpjob id="job-17">
    <state>Finished</state>
    <ispostprocessed>true</ispostprocessed>
    <issessionlocked>false</issessionlocked>
    <iscaptureprimitives>true</iscaptureprimitives>
    <iscapturestrings>true</iscapturestrings>
    <isdogc>false</isdogc>
    <progress value="100" />
    <duration value="5321" />
    <agentpattern>
        <agentname>CustomerFrontend_easyTravel</agentname>
        <hostname>demo-host</hostname>
        <processid>4242</processid>
    </agentpattern>
    <sessionreference id="Memory Dump 2013-12-18" href="http://localhost:8020/rest/management/sessions/Memory%20Dump%202013-12-18" />
</memorydumpjob>"#,
        ))
        .mount(&server)
        .await;

    let job = client_for(&server)
        .memory_dumps()
        .get_memory_dump_job("easyTravel", "job-17")
        .await
        .unwrap();

    assert_eq!(job.id, "job-17");
    assert_eq!(job.state, Some(JobState::Finished));
    assert!(job.is_done());
    assert_eq!(job.is_post_processed, Some(true));
    assert_eq!(job.progress.map(|p| p.value), Some(100));
    assert_eq!(job.duration.map(|d| d.value), Some(5321));
    let pattern = job.agent_pattern.unwrap();
    assert_eq!(pattern.process_id, Some(4242));
    assert_eq!(pattern.host_name.as_deref(), Some("demo-host"));
    assert_eq!(
        job.session_reference.map(|s| s.id).as_deref(),
        Some("Memory Dump 2013-12-18")
    );
}

#[tokio::test]
async fn running_job_is_not_done() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOB_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<memorydumpjob id="job-17"><state>Running</state><progress value="35" /></memorydumpjob>"#,
        ))
        .mount(&server)
        .await;

    let job = client_for(&server)
        .memory_dumps()
        .get_memory_dump_job("easyTravel", "job-17")
        .await
        .unwrap();

    assert_eq!(job.state, Some(JobState::Running));
    assert!(!job.is_done());
    assert_eq!(job.agent_pattern, None);
}

#[tokio::test]
async fn unknown_job_state_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<memorydumpjob id="job-17"><state>Paused</state></memorydumpjob>"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .memory_dumps()
        .get_memory_dump_job("easyTravel", "job-17")
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Decode { .. }));
}

#[tokio::test]
async fn dot_segment_job_id_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .memory_dumps()
        .get_memory_dump_job("easyTravel", "..")
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::InvalidEndpoint(_)));
}
